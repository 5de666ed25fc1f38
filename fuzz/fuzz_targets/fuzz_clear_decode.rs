//! Fuzz target for clear envelope parsing.
//!
//! Tests that `clear_decode` handles arbitrary bytes gracefully: it
//! should reject malformed input with an error but never panic, and
//! any payload it does return must lie within the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use murmur_payload::clear_decode;

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = clear_decode(data) {
        // A decoded payload can never be longer than the envelope
        assert!(decoded.payload.len() <= data.len());
        // Only block-multiple envelopes parse
        assert_eq!(data.len() % 256, 0);
        assert!(!data.is_empty());
    }
});
