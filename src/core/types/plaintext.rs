//! `Plaintext` - message bytes before encryption or after decryption.

use core::fmt::{self, Debug};

use base64::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{SealError, SealResult};
use crate::core::provider::MESSAGE_BYTES_MAX;

/// A message of at most [`MESSAGE_BYTES_MAX`] bytes.
///
/// The buffer is zeroized on drop. Debug output shows only the length.
///
/// # Example
///
/// ```rust
/// use sealkit::Plaintext;
///
/// let message = Plaintext::from_string("Hello!").expect("short message");
/// assert_eq!(message.as_bytes(), b"Hello!");
/// assert_eq!(message.to_base64(), "SGVsbG8h");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Plaintext {
    bytes: Vec<u8>,
}

impl Plaintext {
    /// Creates a plaintext by copying `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadPlaintextLength`] if `bytes` is longer than
    /// [`MESSAGE_BYTES_MAX`].
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        check_length(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Creates a plaintext from the raw bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadPlaintextLength`] if the string is longer
    /// than [`MESSAGE_BYTES_MAX`].
    pub fn from_string(raw: &str) -> SealResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Decodes a standard base64 string, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Base64Decode`] on malformed input and
    /// [`SealError::BadPlaintextLength`] if the decoded message is too long.
    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let decoded = BASE64_STANDARD.decode(encoded)?;
        Self::try_from(decoded)
    }

    /// Wraps bytes produced by a decryption, which are within bounds.
    pub(crate) const fn from_opened(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encodes the plaintext as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }

    /// Returns a reference to the message bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the plaintext and returns the message bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }

    /// Message length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for the empty message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn check_length(len: usize) -> SealResult<()> {
    if len > MESSAGE_BYTES_MAX {
        return Err(SealError::BadPlaintextLength);
    }
    Ok(())
}

impl TryFrom<&[u8]> for Plaintext {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for Plaintext {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        check_length(bytes.len())?;
        Ok(Self { bytes })
    }
}

impl TryFrom<&str> for Plaintext {
    type Error = SealError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::from_string(raw)
    }
}

impl AsRef<[u8]> for Plaintext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plaintext")
            .field("len", &self.bytes.len())
            .finish()
    }
}
