//! `PublicKey` - X25519 public key.
//!
//! A public key is `ScalarMultBase(secret_key)`. Construction from bytes only
//! checks the length: any 32 bytes are accepted as a sealed-box recipient.

use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

use base64::prelude::*;

use crate::core::error::{SealError, SealResult};
use crate::core::operations::fingerprint::{fingerprint, PUBLIC_KEY_SALT};
use crate::core::provider::{PrimitiveProvider, Sodium, PUBLIC_KEY_BYTES};

/// A public key of exactly [`PUBLIC_KEY_BYTES`] bytes.
///
/// # Example
///
/// ```rust
/// use sealkit::{PublicKey, SecretKey};
///
/// let secret = SecretKey::from([0x01u8; 32]);
/// let public = secret.public_key().expect("valid key");
///
/// let parsed = PublicKey::from_base64(&public.to_base64()).expect("valid key");
/// assert_eq!(public, parsed);
/// ```
#[derive(Clone, Copy)]
pub struct PublicKey {
    key: [u8; PUBLIC_KEY_BYTES],
}

impl PublicKey {
    /// Length of a public key in bytes.
    pub const LENGTH: usize = PUBLIC_KEY_BYTES;

    /// Creates a key from a byte slice of exactly [`PUBLIC_KEY_BYTES`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadPublicKeyLength`] on any other length.
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        let key = <[u8; PUBLIC_KEY_BYTES]>::try_from(bytes)
            .map_err(|_| SealError::BadPublicKeyLength)?;
        Ok(Self { key })
    }

    /// Creates a key from the raw bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadPublicKeyLength`] unless the string is
    /// exactly [`PUBLIC_KEY_BYTES`] bytes long.
    pub fn from_string(raw: &str) -> SealResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Decodes a standard base64 string, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Base64Decode`] on malformed input and
    /// [`SealError::BadPublicKeyLength`] on a wrong decoded length.
    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let decoded = BASE64_STANDARD.decode(encoded)?;
        Self::from_bytes(&decoded)
    }

    /// Encodes the key as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.key)
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.key
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; PUBLIC_KEY_BYTES] {
        self.key
    }

    /// Non-cryptographic 64-bit fingerprint, for indexing only.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.key, PUBLIC_KEY_SALT)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<[u8; PUBLIC_KEY_BYTES]> for PublicKey {
    fn from(key: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self { key }
    }
}

impl From<&[u8; PUBLIC_KEY_BYTES]> for PublicKey {
    fn from(key: &[u8; PUBLIC_KEY_BYTES]) -> Self {
        Self { key: *key }
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for PublicKey {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_base64()).finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        Sodium::constant_time_eq(&self.key, &other.key)
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.key);
        state.write(PUBLIC_KEY_SALT);
    }
}
