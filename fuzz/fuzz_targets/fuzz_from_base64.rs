#![no_main]

use libfuzzer_sys::fuzz_target;
use sealkit::{Ciphertext, Nonce, Plaintext, PublicKey, SecretKey};

fuzz_target!(|data: &str| {
    // Try decoding as each buffer kind - should never panic
    let _ = SecretKey::from_base64(data);
    let _ = PublicKey::from_base64(data);
    let _ = Nonce::from_base64(data);
    let _ = Plaintext::from_base64(data);
    let _ = Ciphertext::from_base64(data);
});
