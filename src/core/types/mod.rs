//! Validated byte containers.
//!
//! Every type checks its length at construction and never truncates or pads:
//!
//! - [`SecretKey`] - exactly [`SECRET_KEY_BYTES`](crate::SECRET_KEY_BYTES), zeroized on drop
//! - [`PublicKey`] - exactly [`PUBLIC_KEY_BYTES`](crate::PUBLIC_KEY_BYTES)
//! - [`Nonce`] - exactly [`NONCE_BYTES`](crate::NONCE_BYTES)
//! - [`Plaintext`] - at most [`MESSAGE_BYTES_MAX`](crate::MESSAGE_BYTES_MAX), zeroized on drop
//! - [`Ciphertext`] - at most [`MESSAGE_BYTES_MAX`](crate::MESSAGE_BYTES_MAX)

mod ciphertext;
mod nonce;
mod plaintext;
mod public;
mod secret;

pub use ciphertext::Ciphertext;
pub use nonce::Nonce;
pub use plaintext::Plaintext;
pub use public::PublicKey;
pub use secret::SecretKey;
