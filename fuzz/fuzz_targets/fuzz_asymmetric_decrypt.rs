#![no_main]

use libfuzzer_sys::fuzz_target;
use sealkit::{asymmetric, Ciphertext, SecretKey};

fuzz_target!(|data: &[u8]| {
    let key = SecretKey::from([0x01u8; 32]);
    if let Ok(ciphertext) = Ciphertext::from_bytes(data) {
        let _ = asymmetric::decrypt(&key, &ciphertext);
    }
});
