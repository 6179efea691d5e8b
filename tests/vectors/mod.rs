//! Test vector types for sealkit integration tests.
//!
//! The secretbox and sealed-box suites are byte-compatible with libsodium;
//! `secretbox-1` is the NaCl secretbox test vector and the X25519 suite
//! comes from RFC 7748 section 6.1.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for base64 ingestion of a byte container.
#[derive(Debug, Deserialize)]
pub struct BufferTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// One of `secret-key`, `public-key`, `nonce`, `plaintext`, `ciphertext`
    pub kind: String,
    /// Standard base64 input
    pub base64: String,
    /// Hex-encoded decoded bytes (null for fail tests)
    pub hex: Option<String>,
    /// `length` or `decode` (null for success tests)
    pub error: Option<String>,
}

/// Test vector for public key derivation.
#[derive(Debug, Deserialize)]
pub struct X25519TestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded secret key
    #[serde(rename = "secret-key")]
    pub secret_key: String,
    /// Hex-encoded public key (null for fail tests)
    #[serde(rename = "public-key")]
    pub public_key: Option<String>,
}

/// Test vector for the symmetric channel.
#[derive(Debug, Deserialize)]
pub struct SecretboxTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded secret key
    pub key: String,
    /// Hex-encoded nonce (null for fail tests)
    pub nonce: Option<String>,
    /// Hex-encoded plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Hex-encoded `nonce || authenticator || body`
    pub ciphertext: String,
}

/// Test vector for the asymmetric channel.
#[derive(Debug, Deserialize)]
pub struct SealedBoxTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded recipient secret key
    #[serde(rename = "secret-key")]
    pub secret_key: String,
    /// Hex-encoded recipient public key (null for fail tests)
    #[serde(rename = "public-key")]
    pub public_key: Option<String>,
    /// Hex-encoded plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Hex-encoded `ephemeral_pk || authenticator || body`
    pub ciphertext: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
