//! Asymmetric channel: anonymous sealed boxes.
//!
//! Anyone holding a [`PublicKey`] can encrypt; only the holder of the
//! matching [`SecretKey`] can decrypt. The sender is not authenticated.
//!
//! ```text
//! ciphertext = ephemeral_pk || authenticator || body
//! ```

use crate::core::error::{SealError, SealResult};
use crate::core::operations::keypair::derive_public_with;
use crate::core::provider::{init, PrimitiveProvider, Sodium};
use crate::core::types::{Ciphertext, Plaintext, PublicKey, SecretKey};

/// Encrypts `plaintext` so that only the owner of `public_key` can read it.
///
/// The public key is checked for length, and the provider refuses low-order
/// points whose shared secret would be predictable.
///
/// # Errors
///
/// Returns [`SealError::RandomSource`] if the ephemeral key cannot be drawn
/// and [`SealError::ProviderFault`] if the primitive fails or the public key
/// has low order.
///
/// # Example
///
/// ```rust
/// use sealkit::{asymmetric, KeyPair, Plaintext};
///
/// let recipient = KeyPair::generate().expect("random source");
/// let message = Plaintext::from_string("Hello!").expect("short message");
///
/// let sealed = asymmetric::encrypt(recipient.public(), &message).expect("encrypt");
/// assert_eq!(sealed.len(), 48 + 6);
///
/// let opened = asymmetric::decrypt(recipient.secret(), &sealed).expect("decrypt");
/// assert_eq!(opened, message);
/// ```
pub fn encrypt(public_key: &PublicKey, plaintext: &Plaintext) -> SealResult<Ciphertext> {
    init()?;
    let sealed = seal_with::<Sodium>(public_key.as_bytes(), plaintext.as_bytes())?;
    Ok(Ciphertext::from_sealed(sealed))
}

/// Opens a sealed box addressed to `secret_key`.
///
/// # Errors
///
/// Returns [`SealError::BadCiphertextLength`] if the ciphertext is shorter
/// than the sealed-box overhead and [`SealError::AuthenticationFailed`] if it
/// was modified or sealed to another key.
pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> SealResult<Plaintext> {
    init()?;
    let opened = open_with::<Sodium>(secret_key.as_bytes(), ciphertext.as_bytes())?;
    Ok(Plaintext::from_opened(opened))
}

pub(crate) fn seal_with<P: PrimitiveProvider>(
    public_key: &[u8],
    message: &[u8],
) -> SealResult<Vec<u8>> {
    if message.len() > P::MESSAGE_BYTES_MAX {
        return Err(SealError::BadPlaintextLength);
    }
    if public_key.len() != P::PUBLIC_KEY_BYTES {
        return Err(SealError::BadPublicKeyLength);
    }

    let sealed = P::sealed_box_seal(message, public_key)
        .map_err(|status| status.into_error("sealed box seal"))?;
    if Some(sealed.len()) != P::SEAL_BYTES.checked_add(message.len()) {
        return Err(SealError::ProviderFault("sealed box seal"));
    }
    Ok(sealed)
}

pub(crate) fn open_with<P: PrimitiveProvider>(
    secret_key: &[u8],
    ciphertext: &[u8],
) -> SealResult<Vec<u8>> {
    if ciphertext.len() < P::SEAL_BYTES {
        return Err(SealError::BadCiphertextLength);
    }

    let public_key = derive_public_with::<P>(secret_key)?;
    P::sealed_box_open(ciphertext, public_key.as_bytes(), secret_key)
        .map_err(|_| SealError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operations::keypair::generate_pair;
    use crate::core::provider::testing::Broken;
    use crate::core::provider::SEAL_BYTES;

    #[test]
    fn test_roundtrip() -> SealResult<()> {
        let (secret, public) = generate_pair()?;
        let message = Plaintext::from_string("Hello!")?;

        let sealed = encrypt(&public, &message)?;
        assert_eq!(sealed.len(), SEAL_BYTES + 6);
        assert_eq!(decrypt(&secret, &sealed)?, message);
        Ok(())
    }

    #[test]
    fn test_empty_plaintext() -> SealResult<()> {
        let (secret, public) = generate_pair()?;
        let message = Plaintext::from_bytes(&[])?;

        let sealed = encrypt(&public, &message)?;
        assert_eq!(sealed.len(), SEAL_BYTES);
        assert!(decrypt(&secret, &sealed)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_encrypt_to_arbitrary_key() -> SealResult<()> {
        let public = PublicKey::from([0x01u8; 32]);
        let message = Plaintext::from_string("Hello!")?;

        let sealed = encrypt(&public, &message)?;
        assert_eq!(sealed.len(), SEAL_BYTES + 6);
        assert!(sealed.as_bytes().iter().any(|&b| b != 0));
        Ok(())
    }

    #[test]
    fn test_encrypt_to_low_order_key_fails() -> SealResult<()> {
        let message = Plaintext::from_string("attack at dawn")?;
        let order_eight = PublicKey::from_bytes(
            &hex::decode("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800")
                .expect("valid hex"),
        )?;

        for public in [PublicKey::from([0u8; 32]), order_eight] {
            assert_eq!(
                encrypt(&public, &message),
                Err(SealError::ProviderFault("sealed box seal"))
            );
        }
        Ok(())
    }

    #[test]
    fn test_decrypt_with_low_order_ephemeral_fails() -> SealResult<()> {
        let (secret, public) = generate_pair()?;
        let sealed = encrypt(&public, &Plaintext::from_string("Hello!")?)?;

        let mut forged = sealed.as_bytes().to_vec();
        forged[..32].fill(0);
        assert_eq!(
            decrypt(&secret, &Ciphertext::from_bytes(&forged)?),
            Err(SealError::AuthenticationFailed)
        );
        Ok(())
    }

    #[test]
    fn test_sealing_is_randomized() -> SealResult<()> {
        let (_, public) = generate_pair()?;
        let message = Plaintext::from_string("Hello!")?;

        assert_ne!(encrypt(&public, &message)?, encrypt(&public, &message)?);
        Ok(())
    }

    #[test]
    fn test_wrong_key_fails() -> SealResult<()> {
        let (_, public) = generate_pair()?;
        let (other, _) = generate_pair()?;

        let sealed = encrypt(&public, &Plaintext::from_string("Hello!")?)?;
        assert!(matches!(
            decrypt(&other, &sealed),
            Err(SealError::AuthenticationFailed)
        ));
        Ok(())
    }

    #[test]
    fn test_every_bit_flip_fails() -> SealResult<()> {
        let (secret, public) = generate_pair()?;
        let sealed = encrypt(&public, &Plaintext::from_string("Hello!")?)?;

        for index in 0..sealed.len() {
            for bit in 0..8 {
                let mut tampered = sealed.as_bytes().to_vec();
                tampered[index] ^= 1 << bit;
                let tampered = Ciphertext::from_bytes(&tampered)?;
                assert!(
                    matches!(decrypt(&secret, &tampered), Err(SealError::AuthenticationFailed)),
                    "flip of bit {bit} in byte {index} was not detected"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_short_ciphertext() -> SealResult<()> {
        let (secret, _) = generate_pair()?;
        let short = Ciphertext::from_bytes(&[0u8; SEAL_BYTES - 1])?;
        assert!(matches!(
            decrypt(&secret, &short),
            Err(SealError::BadCiphertextLength)
        ));
        Ok(())
    }

    #[test]
    fn test_raw_length_validation() {
        assert!(matches!(
            seal_with::<Sodium>(&[0x01; 31], b"Hello!"),
            Err(SealError::BadPublicKeyLength)
        ));
        assert!(matches!(
            open_with::<Sodium>(&[0x01; 31], &[0u8; 64]),
            Err(SealError::BadSecretKeyLength)
        ));
    }

    #[test]
    fn test_provider_faults_surface() {
        assert!(matches!(
            seal_with::<Broken>(&[0x01; 32], b"Hello!"),
            Err(SealError::ProviderFault("sealed box seal"))
        ));
        assert!(matches!(
            open_with::<Broken>(&[0x01; 32], &[0u8; 64]),
            Err(SealError::ProviderFault("scalar mult base"))
        ));
    }
}
