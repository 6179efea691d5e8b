#![no_main]

use libfuzzer_sys::fuzz_target;
use sealkit::{symmetric, Ciphertext, SecretKey};

fuzz_target!(|data: &[u8]| {
    let key = SecretKey::from([0x01u8; 32]);
    if let Ok(ciphertext) = Ciphertext::from_bytes(data) {
        // Arbitrary input must be rejected cleanly, never panic
        let _ = symmetric::decrypt(&key, &ciphertext);
    }
});
