//! Fuzz target for hex string parsing.
//!
//! Tests that decoding arbitrary strings is handled safely and that
//! successful decodes round-trip through encoding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use murmur_crypto::hexstr;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(bytes) = hexstr::decode(s) {
        // Round-trip: re-encoding yields the canonical lowercase form
        let canonical = hexstr::encode(&bytes);
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        assert_eq!(canonical, stripped.to_ascii_lowercase());
    }
});
