//! Validated authenticated encryption over X25519 and XSalsa20-Poly1305.
//!
//! sealkit wraps two NaCl constructions behind typed, length-checked
//! buffers:
//!
//! - a **symmetric channel** (`crypto_secretbox`): encrypt and authenticate
//!   under a shared [`SecretKey`]; the nonce is generated for you and
//!   travels inside the ciphertext.
//! - an **asymmetric channel** (`crypto_box_seal`): anyone holding a
//!   [`PublicKey`] can encrypt; only the matching [`SecretKey`] decrypts.
//!   The sender is anonymous.
//!
//! # Quick Start
//!
//! ```rust
//! use sealkit::{asymmetric, symmetric, KeyPair, Plaintext, SecretKey};
//!
//! let message = Plaintext::from_string("Hello!")?;
//!
//! // Shared secret key
//! let key = SecretKey::generate()?;
//! let sealed = symmetric::encrypt(&key, &message, None)?;
//! assert_eq!(symmetric::decrypt(&key, &sealed)?, message);
//!
//! // Sealed box to a public key
//! let recipient = KeyPair::generate()?;
//! let sealed = asymmetric::encrypt(recipient.public(), &message)?;
//! assert_eq!(asymmetric::decrypt(recipient.secret(), &sealed)?, message);
//! # Ok::<(), sealkit::SealError>(())
//! ```
//!
//! # Ciphertext layout
//!
//! | Channel | Layout | Overhead |
//! |---------|--------|----------|
//! | symmetric | `nonce(24) \|\| tag(16) \|\| body` | 40 bytes |
//! | asymmetric | `ephemeral_pk(32) \|\| tag(16) \|\| body` | 48 bytes |
//!
//! Both are byte-compatible with libsodium.
//!
//! # Initialization
//!
//! The primitive provider runs a self test once per process. Every operation
//! passes through that barrier; call [`init`] at start-up to surface a
//! failure early.
//!
//! # Security
//!
//! - Secret keys and plaintexts are zeroized on drop
//! - Debug output redacts secret keys and plaintexts
//! - Constant-time equality for keys and nonces
//! - Decryption failures are a single undifferentiated error
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{BufferKind, SealError, SealResult};
pub use crate::core::operations::{asymmetric, symmetric};
pub use crate::core::operations::{derive_public, generate_pair, KeyPair};
pub use crate::core::provider::{
    init, PrimitiveProvider, ProviderStatus, Sodium, BOX_ZERO_BYTES, MESSAGE_BYTES_MAX,
    NONCE_BYTES, PUBLIC_KEY_BYTES, SEAL_BYTES, SECRETBOX_OVERHEAD, SECRET_KEY_BYTES, ZERO_BYTES,
};
pub use crate::core::types::{Ciphertext, Nonce, Plaintext, PublicKey, SecretKey};
