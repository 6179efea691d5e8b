//! Key-pair derivation.
//!
//! A public key is the X25519 base-point multiple of a secret key. The
//! derivation is deterministic and one-way.

use zeroize::Zeroizing;

use crate::core::error::{SealError, SealResult};
use crate::core::provider::{init, PrimitiveProvider, Sodium, SECRET_KEY_BYTES};
use crate::core::types::{PublicKey, SecretKey};

/// A secret key together with its derived public key.
///
/// # Example
///
/// ```rust
/// use sealkit::KeyPair;
///
/// let pair = KeyPair::generate().expect("random source");
/// assert_eq!(pair.secret().public_key().expect("valid key"), *pair.public());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::RandomSource`] if no entropy is available.
    pub fn generate() -> SealResult<Self> {
        let (secret, public) = generate_pair()?;
        Ok(Self { secret, public })
    }

    /// Builds the pair for an existing secret key.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::ProviderFault`] if the derivation fails.
    pub fn from_secret(secret: SecretKey) -> SealResult<Self> {
        let public = secret.public_key()?;
        Ok(Self { secret, public })
    }

    /// The secret half.
    #[must_use]
    pub const fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// The public half.
    #[must_use]
    pub const fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the pair into its halves.
    #[must_use]
    pub fn into_parts(self) -> (SecretKey, PublicKey) {
        (self.secret, self.public)
    }
}

/// Generates a fresh `(SecretKey, PublicKey)` pair.
///
/// # Errors
///
/// Returns [`SealError::RandomSource`] if no entropy is available and
/// [`SealError::ProviderFault`] if the derivation fails.
pub fn generate_pair() -> SealResult<(SecretKey, PublicKey)> {
    init()?;
    generate_pair_with::<Sodium>()
}

/// Derives the public key for raw secret key bytes.
///
/// # Errors
///
/// Returns [`SealError::BadSecretKeyLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long; the provider is not called in that case.
pub fn derive_public(secret_key: &[u8]) -> SealResult<PublicKey> {
    init()?;
    derive_public_with::<Sodium>(secret_key)
}

pub(crate) fn random_secret<P: PrimitiveProvider>() -> SealResult<SecretKey> {
    let mut key = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    P::fill_random(key.as_mut_slice())
        .map_err(|status| status.into_error("random secret key"))?;
    Ok(SecretKey::from(&*key))
}

pub(crate) fn generate_pair_with<P: PrimitiveProvider>() -> SealResult<(SecretKey, PublicKey)> {
    let secret = random_secret::<P>()?;
    let public = derive_public_with::<P>(secret.as_bytes())?;
    Ok((secret, public))
}

pub(crate) fn derive_public_with<P: PrimitiveProvider>(secret_key: &[u8]) -> SealResult<PublicKey> {
    if secret_key.len() != P::SECRET_KEY_BYTES {
        return Err(SealError::BadSecretKeyLength);
    }

    let point = P::scalar_mult_base(secret_key)
        .map_err(|status| status.into_error("scalar mult base"))?;
    PublicKey::from_bytes(&point).map_err(|_| SealError::ProviderFault("scalar mult base"))
}
