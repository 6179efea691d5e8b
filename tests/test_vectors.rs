//! Integration tests using known-answer test vectors.
//!
//! Ciphertexts in the secretbox and sealed-box suites were produced by an
//! independent NaCl implementation, so passing them shows the output is
//! byte-compatible with libsodium.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use sealkit::{
    asymmetric, derive_public, symmetric, BufferKind, Ciphertext, Nonce, Plaintext, PublicKey,
    SealError, SecretKey,
};
use vectors::*;

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

fn load<T: serde::de::DeserializeOwned>(file: &str) -> TestVectorSuite<T> {
    let path = vectors_dir().join(file);
    load_vectors(path.to_str().expect("valid path"))
}

fn hex(field: Option<&String>, name: &str) -> Vec<u8> {
    let field = field.unwrap_or_else(|| panic!("Test '{name}' is missing a required field"));
    hex_decode(field).expect("valid hex")
}

/// Decodes `encoded` as the named buffer kind and returns its bytes.
fn decode_buffer(kind: &str, encoded: &str) -> Result<Vec<u8>, SealError> {
    match kind {
        "secret-key" => SecretKey::from_base64(encoded).map(|k| k.as_bytes().to_vec()),
        "public-key" => PublicKey::from_base64(encoded).map(|k| k.as_bytes().to_vec()),
        "nonce" => Nonce::from_base64(encoded).map(|n| n.as_bytes().to_vec()),
        "plaintext" => Plaintext::from_base64(encoded).map(Plaintext::into_bytes),
        "ciphertext" => Ciphertext::from_base64(encoded).map(Ciphertext::into_bytes),
        other => panic!("Unknown buffer kind {other}"),
    }
}

fn buffer_kind(kind: &str) -> BufferKind {
    match kind {
        "secret-key" => BufferKind::SecretKey,
        "public-key" => BufferKind::PublicKey,
        "nonce" => BufferKind::Nonce,
        "plaintext" => BufferKind::Plaintext,
        "ciphertext" => BufferKind::Ciphertext,
        other => panic!("Unknown buffer kind {other}"),
    }
}

// =============================================================================
// Byte containers
// =============================================================================

#[test]
fn test_buffer_vectors() {
    let suite: TestVectorSuite<BufferTestVector> = load("buffers.json");
    assert!(!suite.tests.is_empty());

    for test in suite.tests {
        let result = decode_buffer(&test.kind, &test.base64);

        if test.expect_fail {
            let err = match result {
                Ok(_) => panic!("Test '{}' should have failed but succeeded", test.name),
                Err(err) => err,
            };
            match test.error.as_deref() {
                Some("length") => assert_eq!(
                    err.length_kind(),
                    Some(buffer_kind(&test.kind)),
                    "Test '{}' returned {err:?}",
                    test.name
                ),
                Some("decode") => assert!(
                    matches!(err, SealError::Base64Decode(_)),
                    "Test '{}' returned {err:?}",
                    test.name
                ),
                other => panic!("Test '{}' has unknown error class {other:?}", test.name),
            }
        } else {
            let bytes = result
                .unwrap_or_else(|e| panic!("Test '{}' decoding failed: {e}", test.name));
            assert_eq!(bytes, hex(test.hex.as_ref(), &test.name), "Test '{}'", test.name);
            assert_eq!(
                Plaintext::from_bytes(&bytes).expect("bounded").to_base64(),
                test.base64,
                "Test '{}' re-encoding failed",
                test.name
            );
        }
    }
}

// =============================================================================
// Key derivation
// =============================================================================

#[test]
fn test_x25519_vectors() {
    let suite: TestVectorSuite<X25519TestVector> = load("x25519.json");

    for test in suite.tests {
        let secret = hex_decode(&test.secret_key).expect("valid hex");

        if test.expect_fail {
            assert!(
                matches!(derive_public(&secret), Err(SealError::BadSecretKeyLength)),
                "Test '{}' should have failed with a length error",
                test.name
            );
            continue;
        }

        let expected = hex(test.public_key.as_ref(), &test.name);
        let derived = derive_public(&secret)
            .unwrap_or_else(|e| panic!("Test '{}' derivation failed: {e}", test.name));
        assert_eq!(derived.as_bytes().as_slice(), expected.as_slice(), "Test '{}'", test.name);

        let typed = SecretKey::from_bytes(&secret)
            .expect("valid key")
            .public_key()
            .expect("derivation");
        assert_eq!(typed, derived, "Test '{}' typed derivation differs", test.name);
    }
}

// =============================================================================
// Symmetric channel
// =============================================================================

#[test]
fn test_secretbox_vectors() {
    let suite: TestVectorSuite<SecretboxTestVector> = load("secretbox.json");

    for test in suite.tests {
        let key = SecretKey::from_bytes(&hex_decode(&test.key).expect("valid hex"))
            .expect("valid key");
        let ciphertext =
            Ciphertext::from_bytes(&hex_decode(&test.ciphertext).expect("valid hex"))
                .expect("bounded");

        if test.expect_fail {
            assert!(
                symmetric::decrypt(&key, &ciphertext).is_err(),
                "Test '{}' should have failed but succeeded",
                test.name
            );
            continue;
        }

        let nonce = Nonce::from_bytes(&hex(test.nonce.as_ref(), &test.name)).expect("valid nonce");
        let plaintext =
            Plaintext::from_bytes(&hex(test.plaintext.as_ref(), &test.name)).expect("bounded");

        let sealed = symmetric::encrypt(&key, &plaintext, Some(&nonce))
            .unwrap_or_else(|e| panic!("Test '{}' encryption failed: {e}", test.name));
        assert_eq!(sealed, ciphertext, "Test '{}' ciphertext mismatch", test.name);

        let opened = symmetric::decrypt(&key, &ciphertext)
            .unwrap_or_else(|e| panic!("Test '{}' decryption failed: {e}", test.name));
        assert_eq!(opened, plaintext, "Test '{}' plaintext mismatch", test.name);
    }
}

#[test]
fn test_secretbox_failures_are_authentication_or_length() {
    let suite: TestVectorSuite<SecretboxTestVector> = load("secretbox.json");

    for test in suite.tests.into_iter().filter(|t| t.expect_fail) {
        let key = SecretKey::from_bytes(&hex_decode(&test.key).expect("valid hex"))
            .expect("valid key");
        let ciphertext =
            Ciphertext::from_bytes(&hex_decode(&test.ciphertext).expect("valid hex"))
                .expect("bounded");

        let err = symmetric::decrypt(&key, &ciphertext).expect_err("tampered ciphertext");
        assert!(
            matches!(
                err,
                SealError::AuthenticationFailed | SealError::BadCiphertextLength
            ),
            "Test '{}' returned {err:?}",
            test.name
        );
    }
}

// =============================================================================
// Asymmetric channel
// =============================================================================

#[test]
fn test_sealed_box_vectors() {
    let suite: TestVectorSuite<SealedBoxTestVector> = load("sealed_box.json");

    for test in suite.tests {
        let secret = SecretKey::from_bytes(&hex_decode(&test.secret_key).expect("valid hex"))
            .expect("valid key");
        let ciphertext =
            Ciphertext::from_bytes(&hex_decode(&test.ciphertext).expect("valid hex"))
                .expect("bounded");

        if test.expect_fail {
            let err = asymmetric::decrypt(&secret, &ciphertext)
                .expect_err("tampered or misaddressed ciphertext");
            assert!(
                matches!(
                    err,
                    SealError::AuthenticationFailed | SealError::BadCiphertextLength
                ),
                "Test '{}' returned {err:?}",
                test.name
            );
            continue;
        }

        let public = PublicKey::from_bytes(&hex(test.public_key.as_ref(), &test.name))
            .expect("valid key");
        assert_eq!(secret.public_key().expect("derivation"), public);

        let expected = hex(test.plaintext.as_ref(), &test.name);
        let opened = asymmetric::decrypt(&secret, &ciphertext)
            .unwrap_or_else(|e| panic!("Test '{}' decryption failed: {e}", test.name));
        assert_eq!(opened.as_bytes(), expected.as_slice(), "Test '{}'", test.name);
    }
}
