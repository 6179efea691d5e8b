//! `Nonce` - single-use secretbox nonce.
//!
//! A nonce must never be reused with the same secret key. The symmetric
//! channel generates a fresh one when the caller does not supply it.

use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

use base64::prelude::*;

use crate::core::error::{SealError, SealResult};
use crate::core::operations::fingerprint::{fingerprint, NONCE_SALT};
use crate::core::provider::{PrimitiveProvider, Sodium, NONCE_BYTES};

/// A nonce of exactly [`NONCE_BYTES`] bytes.
///
/// # Example
///
/// ```rust
/// use sealkit::Nonce;
///
/// let a = Nonce::generate().expect("random source");
/// let b = Nonce::generate().expect("random source");
/// assert_ne!(a, b);
///
/// assert!(Nonce::from_bytes(&[0u8; 16]).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Nonce {
    bytes: [u8; NONCE_BYTES],
}

impl Nonce {
    /// Length of a nonce in bytes.
    pub const LENGTH: usize = NONCE_BYTES;

    /// Generates a fresh nonce from the operating system random source.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::RandomSource`] if no entropy is available.
    pub fn generate() -> SealResult<Self> {
        crate::core::provider::init()?;
        Self::generate_with::<Sodium>()
    }

    pub(crate) fn generate_with<P: PrimitiveProvider>() -> SealResult<Self> {
        let mut bytes = [0u8; NONCE_BYTES];
        P::fill_random(&mut bytes).map_err(|status| status.into_error("random nonce"))?;
        Ok(Self { bytes })
    }

    /// Creates a nonce from a byte slice of exactly [`NONCE_BYTES`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadNonceLength`] on any other length.
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        let bytes =
            <[u8; NONCE_BYTES]>::try_from(bytes).map_err(|_| SealError::BadNonceLength)?;
        Ok(Self { bytes })
    }

    /// Creates a nonce from the raw bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadNonceLength`] unless the string is exactly
    /// [`NONCE_BYTES`] bytes long.
    pub fn from_string(raw: &str) -> SealResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Decodes a standard base64 string, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Base64Decode`] on malformed input and
    /// [`SealError::BadNonceLength`] on a wrong decoded length.
    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let decoded = BASE64_STANDARD.decode(encoded)?;
        Self::from_bytes(&decoded)
    }

    /// Encodes the nonce as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.bytes)
    }

    /// Returns a reference to the raw nonce bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; NONCE_BYTES] {
        &self.bytes
    }

    /// Returns the raw nonce bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; NONCE_BYTES] {
        self.bytes
    }

    /// Non-cryptographic 64-bit fingerprint, for indexing only.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.bytes, NONCE_SALT)
    }
}

impl From<[u8; NONCE_BYTES]> for Nonce {
    fn from(bytes: [u8; NONCE_BYTES]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for Nonce {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nonce").field(&self.to_base64()).finish()
    }
}

impl PartialEq for Nonce {
    fn eq(&self, other: &Self) -> bool {
        Sodium::constant_time_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Nonce {}

impl Hash for Nonce {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.bytes);
        state.write(NONCE_SALT);
    }
}
