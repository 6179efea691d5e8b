//! Primitive provider: the fixed cryptographic surface sealkit builds on.
//!
//! A provider exposes the NaCl-style constants and operations the channels
//! need: base-point scalar multiplication, secretbox seal/open over
//! zero-padded buffers, sealed-box seal/open, a constant-time comparison and
//! a random source. The channels own every length check and all framing; the
//! provider is only ever called with validated input, so a failure it
//! reports on the sealing side is either a defect or a refused low-order
//! public key.
//!
//! [`Sodium`] is the only provider. It implements the libsodium
//! `crypto_secretbox_xsalsa20poly1305` and `crypto_box_seal` constructions on
//! RustCrypto crates.
//!
//! The provider must pass its start-up self test once per process before it
//! is used. [`init`] runs that barrier; every public operation runs it too.

use crypto_box::aead::rand_core::{impls, CryptoRng, Error as RngError, RngCore};
use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;
use tracing::{debug, error};

use crate::core::error::{SealError, SealResult};

mod private {
    pub trait Sealed {}
}

/// Status reported by a provider operation that did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    /// The primitive refused its input, or verification failed.
    Rejected,
    /// The operating system random source could not be read.
    NoEntropy,
}

impl ProviderStatus {
    /// Maps a status from a call with validated input into a crate error.
    pub(crate) const fn into_error(self, operation: &'static str) -> SealError {
        match self {
            Self::Rejected => SealError::ProviderFault(operation),
            Self::NoEntropy => SealError::RandomSource,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderStatus>;

/// Trait for primitive providers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait PrimitiveProvider: private::Sealed + Send + Sync + 'static {
    /// Human-readable provider name.
    const NAME: &'static str;

    /// Secret key length (`crypto_secretbox_KEYBYTES`).
    const SECRET_KEY_BYTES: usize;

    /// Public key length; equals the scalar multiplication output length.
    const PUBLIC_KEY_BYTES: usize;

    /// Secretbox nonce length.
    const NONCE_BYTES: usize;

    /// Largest plaintext the secretbox accepts.
    const MESSAGE_BYTES_MAX: usize;

    /// Sealed-box overhead: ephemeral public key plus authenticator.
    const SEAL_BYTES: usize;

    /// Zero prefix required in front of a secretbox plaintext.
    const ZERO_BYTES: usize;

    /// Zero prefix present in front of a raw secretbox ciphertext.
    const BOX_ZERO_BYTES: usize;

    /// One-time start-up work. Called once per process by [`init`].
    fn initialize() -> ProviderResult<()>;

    /// Fills `buf` from a cryptographically secure random source.
    fn fill_random(buf: &mut [u8]) -> ProviderResult<()>;

    /// Multiplies the curve base point by `scalar`.
    fn scalar_mult_base(scalar: &[u8]) -> ProviderResult<Vec<u8>>;

    /// Seals `padded`, whose first `ZERO_BYTES` bytes are zero.
    ///
    /// The output has the same length as the input and starts with
    /// `BOX_ZERO_BYTES` zero bytes.
    fn secretbox_seal(padded: &[u8], nonce: &[u8], key: &[u8]) -> ProviderResult<Vec<u8>>;

    /// Opens `padded`, whose first `BOX_ZERO_BYTES` bytes are zero.
    ///
    /// On success the output has the same length as the input and starts
    /// with `ZERO_BYTES` zero bytes.
    fn secretbox_open(padded: &[u8], nonce: &[u8], key: &[u8]) -> ProviderResult<Vec<u8>>;

    /// Anonymously encrypts `message` to `public_key`.
    fn sealed_box_seal(message: &[u8], public_key: &[u8]) -> ProviderResult<Vec<u8>>;

    /// Opens a sealed box addressed to the key pair.
    fn sealed_box_open(
        ciphertext: &[u8],
        public_key: &[u8],
        secret_key: &[u8],
    ) -> ProviderResult<Vec<u8>>;

    /// Compares two buffers in time independent of their contents.
    ///
    /// Returns `false` early if the lengths differ.
    fn constant_time_eq(a: &[u8], b: &[u8]) -> bool;
}

// =============================================================================
// Sodium: XSalsa20-Poly1305 + X25519
// =============================================================================

/// The default provider: XSalsa20-Poly1305 secretbox and X25519 sealed boxes.
///
/// Output is byte-compatible with libsodium's `crypto_secretbox` and
/// `crypto_box_seal`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sodium;

impl private::Sealed for Sodium {}

/// Length of an X25519 key.
const X25519_BYTES: usize = 32;

/// Length of a Poly1305 tag.
const MAC_BYTES: usize = 16;

// RFC 7748 section 6.1, Alice's key pair.
const SELF_TEST_SCALAR: [u8; X25519_BYTES] = [
    0x77, 0x07, 0x6d, 0x0a, 0x73, 0x18, 0xa5, 0x7d, 0x3c, 0x16, 0xc1, 0x72, 0x51, 0xb2, 0x66, 0x45,
    0xdf, 0x4c, 0x2f, 0x87, 0xeb, 0xc0, 0x99, 0x2a, 0xb1, 0x77, 0xfb, 0xa5, 0x1d, 0xb9, 0x2c, 0x2a,
];
const SELF_TEST_POINT: [u8; X25519_BYTES] = [
    0x85, 0x20, 0xf0, 0x09, 0x89, 0x30, 0xa7, 0x54, 0x74, 0x8b, 0x7d, 0xdc, 0xb4, 0x3e, 0xf7, 0x5a,
    0x0d, 0xbf, 0x3a, 0x0d, 0x26, 0x38, 0x1a, 0xf4, 0xeb, 0xa4, 0xa9, 0x8e, 0xaa, 0x9b, 0x4e, 0x6a,
];

impl PrimitiveProvider for Sodium {
    const NAME: &'static str = "xsalsa20poly1305-x25519";
    const SECRET_KEY_BYTES: usize = X25519_BYTES;
    const PUBLIC_KEY_BYTES: usize = X25519_BYTES;
    const NONCE_BYTES: usize = 24;
    const MESSAGE_BYTES_MAX: usize = usize::MAX - MAC_BYTES;
    const SEAL_BYTES: usize = X25519_BYTES + MAC_BYTES;
    const ZERO_BYTES: usize = 32;
    const BOX_ZERO_BYTES: usize = 16;

    fn initialize() -> ProviderResult<()> {
        let mut entropy = [0u8; X25519_BYTES];
        Self::fill_random(&mut entropy)?;

        let point = Self::scalar_mult_base(&SELF_TEST_SCALAR)?;
        if Self::constant_time_eq(&point, &SELF_TEST_POINT) {
            Ok(())
        } else {
            Err(ProviderStatus::Rejected)
        }
    }

    fn fill_random(buf: &mut [u8]) -> ProviderResult<()> {
        use rand_core::{OsRng, TryRngCore};

        OsRng
            .try_fill_bytes(buf)
            .map_err(|_| ProviderStatus::NoEntropy)
    }

    fn scalar_mult_base(scalar: &[u8]) -> ProviderResult<Vec<u8>> {
        use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
        use zeroize::Zeroizing;

        let scalar = Zeroizing::new(to_key_array(scalar)?);
        let point = x25519(*scalar, X25519_BASEPOINT_BYTES);

        // libsodium refuses to return the identity point.
        if point.iter().all(|&b| b == 0) {
            return Err(ProviderStatus::Rejected);
        }
        Ok(point.to_vec())
    }

    fn secretbox_seal(padded: &[u8], nonce: &[u8], key: &[u8]) -> ProviderResult<Vec<u8>> {
        use crypto_secretbox::aead::generic_array::GenericArray;
        use crypto_secretbox::aead::{AeadInPlace, KeyInit};
        use crypto_secretbox::XSalsa20Poly1305;

        if padded.len() < Self::ZERO_BYTES || nonce.len() != Self::NONCE_BYTES {
            return Err(ProviderStatus::Rejected);
        }
        let cipher =
            XSalsa20Poly1305::new_from_slice(key).map_err(|_| ProviderStatus::Rejected)?;

        let mut out = padded.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                b"",
                &mut out[Self::ZERO_BYTES..],
            )
            .map_err(|_| ProviderStatus::Rejected)?;

        out[..Self::BOX_ZERO_BYTES].fill(0);
        out[Self::BOX_ZERO_BYTES..Self::ZERO_BYTES].copy_from_slice(&tag);
        Ok(out)
    }

    fn secretbox_open(padded: &[u8], nonce: &[u8], key: &[u8]) -> ProviderResult<Vec<u8>> {
        use crypto_secretbox::aead::generic_array::GenericArray;
        use crypto_secretbox::aead::{AeadInPlace, KeyInit};
        use crypto_secretbox::XSalsa20Poly1305;

        if padded.len() < Self::ZERO_BYTES || nonce.len() != Self::NONCE_BYTES {
            return Err(ProviderStatus::Rejected);
        }
        let cipher =
            XSalsa20Poly1305::new_from_slice(key).map_err(|_| ProviderStatus::Rejected)?;
        let tag = GenericArray::clone_from_slice(&padded[Self::BOX_ZERO_BYTES..Self::ZERO_BYTES]);

        let mut out = padded.to_vec();
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                b"",
                &mut out[Self::ZERO_BYTES..],
                &tag,
            )
            .map_err(|_| ProviderStatus::Rejected)?;

        out[..Self::ZERO_BYTES].fill(0);
        Ok(out)
    }

    fn sealed_box_seal(message: &[u8], public_key: &[u8]) -> ProviderResult<Vec<u8>> {
        use zeroize::Zeroizing;

        let recipient = to_key_array(public_key)?;
        let mut ephemeral = Zeroizing::new([0u8; X25519_BYTES]);
        Self::fill_random(&mut ephemeral[..])?;

        // libsodium refuses to seal to a low-order point.
        if shares_identity(&ephemeral, &recipient) {
            return Err(ProviderStatus::Rejected);
        }

        crypto_box::PublicKey::from(recipient)
            .seal(&mut EphemeralSource(ephemeral), message)
            .map_err(|_| ProviderStatus::Rejected)
    }

    fn sealed_box_open(
        ciphertext: &[u8],
        public_key: &[u8],
        secret_key: &[u8],
    ) -> ProviderResult<Vec<u8>> {
        use zeroize::Zeroizing;

        if ciphertext.len() < Self::SEAL_BYTES || public_key.len() != X25519_BYTES {
            return Err(ProviderStatus::Rejected);
        }
        let secret_bytes = Zeroizing::new(to_key_array(secret_key)?);
        let ephemeral = to_key_array(&ciphertext[..X25519_BYTES])?;
        if shares_identity(&secret_bytes, &ephemeral) {
            return Err(ProviderStatus::Rejected);
        }

        let recipient = crypto_box::SecretKey::from(*secret_bytes);
        if !Self::constant_time_eq(recipient.public_key().as_bytes(), public_key) {
            return Err(ProviderStatus::Rejected);
        }
        recipient
            .unseal(ciphertext)
            .map_err(|_| ProviderStatus::Rejected)
    }

    fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
        a.ct_eq(b).into()
    }
}

/// Copies a 32-byte key out of a slice.
fn to_key_array(bytes: &[u8]) -> ProviderResult<[u8; X25519_BYTES]> {
    <[u8; X25519_BYTES]>::try_from(bytes).map_err(|_| ProviderStatus::Rejected)
}

/// Returns `true` if the X25519 product of `scalar` and `point` is the
/// identity, which happens for every scalar when `point` has low order.
fn shares_identity(scalar: &[u8; X25519_BYTES], point: &[u8; X25519_BYTES]) -> bool {
    use x25519_dalek::x25519;
    use zeroize::Zeroizing;

    let shared = Zeroizing::new(x25519(*scalar, *point));
    shared[..].ct_eq(&[0u8; X25519_BYTES]).into()
}

/// Random source handed to `crypto_box` sealing. It yields the ephemeral
/// scalar drawn beforehand through [`PrimitiveProvider::fill_random`], so an
/// empty entropy pool is reported as [`ProviderStatus::NoEntropy`].
struct EphemeralSource(zeroize::Zeroizing<[u8; X25519_BYTES]>);

impl RngCore for EphemeralSource {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (out, byte) in dest.iter_mut().zip(self.0.iter().cycle()) {
            *out = *byte;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for EphemeralSource {}

// =============================================================================
// Crate-level constants
// =============================================================================

/// Secret key length.
pub const SECRET_KEY_BYTES: usize = <Sodium as PrimitiveProvider>::SECRET_KEY_BYTES;
/// Public key length.
pub const PUBLIC_KEY_BYTES: usize = <Sodium as PrimitiveProvider>::PUBLIC_KEY_BYTES;
/// Nonce length.
pub const NONCE_BYTES: usize = <Sodium as PrimitiveProvider>::NONCE_BYTES;
/// Largest accepted plaintext.
pub const MESSAGE_BYTES_MAX: usize = <Sodium as PrimitiveProvider>::MESSAGE_BYTES_MAX;
/// Sealed-box ciphertext overhead.
pub const SEAL_BYTES: usize = <Sodium as PrimitiveProvider>::SEAL_BYTES;
/// Secretbox plaintext zero prefix.
pub const ZERO_BYTES: usize = <Sodium as PrimitiveProvider>::ZERO_BYTES;
/// Secretbox ciphertext zero prefix.
pub const BOX_ZERO_BYTES: usize = <Sodium as PrimitiveProvider>::BOX_ZERO_BYTES;
/// Secretbox ciphertext overhead after the nonce: the authenticator.
pub const SECRETBOX_OVERHEAD: usize = ZERO_BYTES - BOX_ZERO_BYTES;

// =============================================================================
// One-time initialization
// =============================================================================

/// Outcome of the provider self test, computed on first access.
static INITIALIZED: Lazy<SealResult<()>> = Lazy::new(initialize_with::<Sodium>);

/// Runs `P`'s self test and logs the outcome.
pub(crate) fn initialize_with<P: PrimitiveProvider>() -> SealResult<()> {
    match P::initialize() {
        Ok(()) => {
            debug!(provider = P::NAME, "primitive provider initialized");
            Ok(())
        }
        Err(status) => {
            error!(provider = P::NAME, ?status, "primitive provider self test failed");
            Err(SealError::InitializationFailed)
        }
    }
}

/// Runs the provider's start-up self test exactly once per process.
///
/// Later calls return the cached outcome. Every operation in the crate calls
/// this before touching the provider, so calling it explicitly is only needed
/// to surface a failure at application start-up.
///
/// # Errors
///
/// Returns [`SealError::InitializationFailed`] if the self test failed.
///
/// # Example
///
/// ```rust
/// sealkit::init().expect("provider self test");
/// ```
pub fn init() -> SealResult<()> {
    INITIALIZED.clone()
}

// =============================================================================
// Test providers
// =============================================================================
