//! Symmetric channel: secretbox authenticated encryption.
//!
//! The secretbox primitive works on zero-padded buffers. Encryption prepends
//! `ZERO_BYTES` zeros to the plaintext, seals, drops the `BOX_ZERO_BYTES`
//! zero prefix of the result and prepends the nonce:
//!
//! ```text
//! ciphertext = nonce || authenticator || body
//! ```
//!
//! The nonce travels with the ciphertext, so decryption needs only the key.

use zeroize::Zeroizing;

use crate::core::error::{SealError, SealResult};
use crate::core::provider::{init, PrimitiveProvider, Sodium};
use crate::core::types::{Ciphertext, Nonce, Plaintext, SecretKey};

/// Encrypts and authenticates `plaintext` under `secret_key`.
///
/// A fresh random nonce is used when `nonce` is `None`. A supplied nonce must
/// never have been used with the same key before.
///
/// # Errors
///
/// Returns [`SealError::RandomSource`] if a nonce cannot be generated and
/// [`SealError::ProviderFault`] if the primitive fails.
///
/// # Example
///
/// ```rust
/// use sealkit::{symmetric, Plaintext, SecretKey};
///
/// let key = SecretKey::generate().expect("random source");
/// let message = Plaintext::from_string("Hello!").expect("short message");
///
/// let sealed = symmetric::encrypt(&key, &message, None).expect("encrypt");
/// assert_eq!(sealed.len(), 24 + 16 + 6);
///
/// let opened = symmetric::decrypt(&key, &sealed).expect("decrypt");
/// assert_eq!(opened, message);
/// ```
pub fn encrypt(
    secret_key: &SecretKey,
    plaintext: &Plaintext,
    nonce: Option<&Nonce>,
) -> SealResult<Ciphertext> {
    init()?;
    let sealed = seal_with::<Sodium>(
        secret_key.as_bytes(),
        plaintext.as_bytes(),
        nonce.map(|n| n.as_bytes().as_slice()),
    )?;
    Ok(Ciphertext::from_sealed(sealed))
}

/// Verifies and decrypts a ciphertext produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`SealError::BadCiphertextLength`] if the ciphertext cannot hold a
/// nonce and an authenticator, and [`SealError::AuthenticationFailed`] if it
/// was modified or encrypted under a different key.
pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> SealResult<Plaintext> {
    init()?;
    let opened = open_with::<Sodium>(secret_key.as_bytes(), ciphertext.as_bytes())?;
    Ok(Plaintext::from_opened(opened))
}

pub(crate) fn seal_with<P: PrimitiveProvider>(
    key: &[u8],
    message: &[u8],
    nonce: Option<&[u8]>,
) -> SealResult<Vec<u8>> {
    if message.len() > P::MESSAGE_BYTES_MAX {
        return Err(SealError::BadPlaintextLength);
    }
    if key.len() != P::SECRET_KEY_BYTES {
        return Err(SealError::BadSecretKeyLength);
    }

    let nonce = match nonce {
        Some(nonce) if nonce.len() == P::NONCE_BYTES => nonce.to_vec(),
        Some(_) => return Err(SealError::BadNonceLength),
        None => {
            let mut fresh = vec![0u8; P::NONCE_BYTES];
            P::fill_random(&mut fresh).map_err(|status| status.into_error("random nonce"))?;
            fresh
        }
    };

    let padded_len = P::ZERO_BYTES
        .checked_add(message.len())
        .ok_or(SealError::BadPlaintextLength)?;
    let mut padded = Zeroizing::new(vec![0u8; padded_len]);
    padded[P::ZERO_BYTES..].copy_from_slice(message);

    let sealed = P::secretbox_seal(&padded, &nonce, key)
        .map_err(|status| status.into_error("secretbox seal"))?;
    if sealed.len() != padded_len {
        return Err(SealError::ProviderFault("secretbox seal"));
    }

    let body = &sealed[P::BOX_ZERO_BYTES..];
    let mut out = Vec::with_capacity(nonce.len() + body.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(body);
    Ok(out)
}

pub(crate) fn open_with<P: PrimitiveProvider>(key: &[u8], ciphertext: &[u8]) -> SealResult<Vec<u8>> {
    if key.len() != P::SECRET_KEY_BYTES {
        return Err(SealError::BadSecretKeyLength);
    }
    if ciphertext.len() < P::NONCE_BYTES {
        return Err(SealError::BadCiphertextLength);
    }

    let (nonce, body) = ciphertext.split_at(P::NONCE_BYTES);
    if body.len() < P::ZERO_BYTES - P::BOX_ZERO_BYTES {
        return Err(SealError::BadCiphertextLength);
    }

    let mut padded = vec![0u8; P::BOX_ZERO_BYTES + body.len()];
    padded[P::BOX_ZERO_BYTES..].copy_from_slice(body);

    let opened = Zeroizing::new(
        P::secretbox_open(&padded, nonce, key).map_err(|_| SealError::AuthenticationFailed)?,
    );
    if opened.len() < P::ZERO_BYTES {
        return Err(SealError::BadDecryptionOutput);
    }
    Ok(opened[P::ZERO_BYTES..].to_vec())
}
