//! Core sealkit types and operations.
//!
//! - [`provider`] - The primitive provider trait, its constants and [`init`]
//! - [`error`] - Error types
//! - [`types`] - Validated byte containers (keys, nonce, plaintext, ciphertext)
//! - [`operations`] - Key derivation and the two encryption channels

pub mod error;
pub mod operations;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{BufferKind, SealError, SealResult};
pub use provider::{init, PrimitiveProvider, Sodium};
