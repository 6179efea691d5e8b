//! Ergonomic imports.
//!
//! ```rust
//! use sealkit::prelude::*;
//!
//! let recipient = KeyPair::generate()?;
//! let sealed = asymmetric::encrypt(recipient.public(), &Plaintext::from_string("hi")?)?;
//! assert_eq!(asymmetric::decrypt(recipient.secret(), &sealed)?.as_bytes(), b"hi");
//! # Ok::<(), SealError>(())
//! ```

pub use crate::core::error::{BufferKind, SealError, SealResult};
pub use crate::core::operations::{asymmetric, symmetric};
pub use crate::core::operations::{derive_public, generate_pair, KeyPair};
pub use crate::core::provider::init;
pub use crate::core::types::{Ciphertext, Nonce, Plaintext, PublicKey, SecretKey};
