//! `SecretKey` - symmetric key and asymmetric private key.
//!
//! The same 32 random bytes serve as the secretbox key and as the X25519
//! scalar of a key pair.

use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};

use base64::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{SealError, SealResult};
use crate::core::operations::fingerprint::{fingerprint, SECRET_KEY_SALT};
use crate::core::operations::keypair;
use crate::core::provider::{PrimitiveProvider, Sodium, SECRET_KEY_BYTES};
use crate::core::types::PublicKey;

/// Secret key material of exactly [`SECRET_KEY_BYTES`] bytes.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use sealkit::SecretKey;
///
/// let key = SecretKey::from([0x01u8; 32]);
/// let encoded = key.to_base64();
///
/// let parsed = SecretKey::from_base64(&encoded).expect("valid key");
/// assert_eq!(key, parsed);
///
/// assert!(SecretKey::from_bytes(&[0x01u8; 31]).is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    key: [u8; SECRET_KEY_BYTES],
}

impl SecretKey {
    /// Length of a secret key in bytes.
    pub const LENGTH: usize = SECRET_KEY_BYTES;

    /// Generates a fresh key from the operating system random source.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::RandomSource`] if no entropy is available.
    pub fn generate() -> SealResult<Self> {
        crate::core::provider::init()?;
        keypair::random_secret::<Sodium>()
    }

    /// Creates a key from a byte slice of exactly [`SECRET_KEY_BYTES`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadSecretKeyLength`] on any other length.
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        let key = <[u8; SECRET_KEY_BYTES]>::try_from(bytes)
            .map_err(|_| SealError::BadSecretKeyLength)?;
        Ok(Self { key })
    }

    /// Creates a key from the raw bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BadSecretKeyLength`] unless the string is
    /// exactly [`SECRET_KEY_BYTES`] bytes long.
    pub fn from_string(raw: &str) -> SealResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Decodes a standard base64 string, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Base64Decode`] on malformed input and
    /// [`SealError::BadSecretKeyLength`] on a wrong decoded length.
    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let mut decoded = BASE64_STANDARD.decode(encoded)?;
        let key = Self::from_bytes(&decoded);
        decoded.zeroize();
        key
    }

    /// Encodes the key as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.key)
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_BYTES] {
        &self.key
    }

    /// Derives the matching public key.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::ProviderFault`] if the scalar multiplication
    /// fails, which does not happen for valid keys.
    pub fn public_key(&self) -> SealResult<PublicKey> {
        keypair::derive_public(&self.key)
    }

    /// Non-cryptographic 64-bit fingerprint, for indexing only.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.key, SECRET_KEY_SALT)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<[u8; SECRET_KEY_BYTES]> for SecretKey {
    fn from(key: [u8; SECRET_KEY_BYTES]) -> Self {
        Self { key }
    }
}

impl From<&[u8; SECRET_KEY_BYTES]> for SecretKey {
    fn from(key: &[u8; SECRET_KEY_BYTES]) -> Self {
        Self { key: *key }
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for SecretKey {
    type Error = SealError;

    fn try_from(mut bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        Sodium::constant_time_eq(&self.key, &other.key)
    }
}

impl Eq for SecretKey {}

impl Hash for SecretKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.key);
        state.write(SECRET_KEY_SALT);
    }
}
