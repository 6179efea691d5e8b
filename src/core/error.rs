//! Error types for sealkit operations.
//!
//! Every failure in the crate is a [`SealError`] returned to the immediate
//! caller. Nothing is logged or retried. Messages for decryption failures are
//! intentionally vague so they carry no information about which check failed.

use core::fmt::{self, Display};

use thiserror::Error;

use crate::core::provider::{
    MESSAGE_BYTES_MAX, NONCE_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, ZERO_BYTES,
};

/// The byte-container kind a length error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// A [`SecretKey`](crate::core::types::SecretKey).
    SecretKey,
    /// A [`PublicKey`](crate::core::types::PublicKey).
    PublicKey,
    /// A [`Nonce`](crate::core::types::Nonce).
    Nonce,
    /// A [`Plaintext`](crate::core::types::Plaintext).
    Plaintext,
    /// A [`Ciphertext`](crate::core::types::Ciphertext).
    Ciphertext,
}

impl Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SecretKey => "secret key",
            Self::PublicKey => "public key",
            Self::Nonce => "nonce",
            Self::Plaintext => "plaintext",
            Self::Ciphertext => "ciphertext",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building buffers or encrypting and decrypting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SealError {
    /// The secret key is not exactly `SECRET_KEY_BYTES` long.
    #[error("Invalid secret key length, need {SECRET_KEY_BYTES}")]
    BadSecretKeyLength,

    /// The public key is not exactly `PUBLIC_KEY_BYTES` long.
    #[error("Invalid public key length, need {PUBLIC_KEY_BYTES}")]
    BadPublicKeyLength,

    /// The nonce is not exactly `NONCE_BYTES` long.
    #[error("Invalid nonce length, need {NONCE_BYTES}")]
    BadNonceLength,

    /// The plaintext exceeds `MESSAGE_BYTES_MAX`.
    #[error("Invalid plaintext length, need <= {MESSAGE_BYTES_MAX}")]
    BadPlaintextLength,

    /// The ciphertext is too short to hold its framing, or too long.
    #[error("Invalid ciphertext length")]
    BadCiphertextLength,

    /// The opened secretbox buffer is shorter than its zero prefix.
    #[error("Decryption output too short, need >= {ZERO_BYTES}")]
    BadDecryptionOutput,

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Ciphertext was tampered with, corrupted, or opened with the wrong key.
    /// Intentionally vague for security.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The operating system random source could not be read.
    #[error("Random source unavailable")]
    RandomSource,

    /// The primitive provider rejected a call whose inputs were already
    /// length-validated: a defect, or a low-order recipient public key.
    #[error("Unexpected primitive provider failure in {0}")]
    ProviderFault(&'static str),

    /// The primitive provider failed its start-up self test.
    #[error("Primitive provider initialization failed")]
    InitializationFailed,
}

impl SealError {
    /// Returns the buffer kind if this is a length validation error.
    #[must_use]
    pub const fn length_kind(&self) -> Option<BufferKind> {
        match self {
            Self::BadSecretKeyLength => Some(BufferKind::SecretKey),
            Self::BadPublicKeyLength => Some(BufferKind::PublicKey),
            Self::BadNonceLength => Some(BufferKind::Nonce),
            Self::BadPlaintextLength => Some(BufferKind::Plaintext),
            Self::BadCiphertextLength => Some(BufferKind::Ciphertext),
            _ => None,
        }
    }

    /// Returns `true` for length validation errors.
    #[must_use]
    pub const fn is_length_error(&self) -> bool {
        self.length_kind().is_some()
    }
}

/// Result type alias for sealkit operations.
pub type SealResult<T> = Result<T, SealError>;
