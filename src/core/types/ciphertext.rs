//! `Ciphertext` - output of either channel.
//!
//! Symmetric layout: `nonce || authenticator || body`.
//! Asymmetric layout: `ephemeral_pk || authenticator || body`.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::{SealError, SealResult};
use crate::core::provider::MESSAGE_BYTES_MAX;

/// An encrypted message of at most [`MESSAGE_BYTES_MAX`] bytes.
///
/// The layout is only checked when decrypting; any bounded byte string is a
/// valid `Ciphertext`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    bytes: Vec<u8>,
}

impl Ciphertext {
    /// Creates a ciphertext by copying `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadCiphertextLength`] if `bytes` is longer than
    /// [`MESSAGE_BYTES_MAX`].
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        check_length(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Creates a ciphertext from the raw bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadCiphertextLength`] if the string is longer
    /// than [`MESSAGE_BYTES_MAX`].
    pub fn from_string(raw: &str) -> SealResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Decodes a standard base64 string, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Base64Decode`] on malformed input and
    /// [`SealError::BadCiphertextLength`] if the decoded bytes are too long.
    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let decoded = BASE64_STANDARD.decode(encoded)?;
        Self::try_from(decoded)
    }

    /// Wraps bytes produced by an encryption, which are within bounds.
    pub(crate) const fn from_sealed(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encodes the ciphertext as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }

    /// Returns a reference to the ciphertext bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the ciphertext and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Ciphertext length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty byte string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn check_length(len: usize) -> SealResult<()> {
    if len > MESSAGE_BYTES_MAX {
        return Err(SealError::BadCiphertextLength);
    }
    Ok(())
}

impl TryFrom<&[u8]> for Ciphertext {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for Ciphertext {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        check_length(bytes.len())?;
        Ok(Self { bytes })
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext")
            .field("len", &self.bytes.len())
            .finish()
    }
}
