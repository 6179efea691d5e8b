//! Non-cryptographic fingerprints for indexing byte containers.
//!
//! A fingerprint is 64-bit FNV-1a over the buffer bytes followed by a salt
//! naming the container type, so equal bytes held by different types land in
//! different buckets. Fingerprints collide; they are for hash maps and caches
//! only and never replace the constant-time equality on the types.

use core::hash::Hasher;

use fnv::FnvHasher;

/// Salt appended when fingerprinting a [`SecretKey`](crate::core::types::SecretKey).
pub const SECRET_KEY_SALT: &[u8] = b"SecretKey";

/// Salt appended when fingerprinting a [`PublicKey`](crate::core::types::PublicKey).
pub const PUBLIC_KEY_SALT: &[u8] = b"Public";

/// Salt appended when fingerprinting a [`Nonce`](crate::core::types::Nonce).
pub const NONCE_SALT: &[u8] = b"Nonce";

/// Computes the FNV-1a fingerprint of `bytes || salt`.
#[must_use]
pub fn fingerprint(bytes: &[u8], salt: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(bytes);
    hasher.write(salt);
    hasher.finish()
}
