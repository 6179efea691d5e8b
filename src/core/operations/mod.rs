//! Cryptographic operations.
//!
//! - [`keypair`] - Public key derivation and key-pair generation
//! - [`symmetric`] - Secretbox encryption under a shared [`SecretKey`](crate::core::types::SecretKey)
//! - [`asymmetric`] - Anonymous sealed boxes to a [`PublicKey`](crate::core::types::PublicKey)
//! - [`fingerprint`] - Non-cryptographic hashing for indexing

pub mod asymmetric;
pub mod fingerprint;
pub mod keypair;
pub mod symmetric;

pub use keypair::{derive_public, generate_pair, KeyPair};
