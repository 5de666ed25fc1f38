//! Fuzz target for ECIES decryption.
//!
//! Arbitrary blobs against a random private key must fail cleanly
//! (short input, invalid ephemeral point, or MAC mismatch) and never
//! panic or return plaintext.

#![no_main]

use libfuzzer_sys::fuzz_target;
use murmur_crypto::PrivateKey;
use murmur_payload::decrypt_asymmetric;

fuzz_target!(|data: &[u8]| {
    let key = PrivateKey::generate();
    assert!(decrypt_asymmetric(data, &key).is_err());
});
