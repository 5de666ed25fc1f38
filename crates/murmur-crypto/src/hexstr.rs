//! Hex string conversion helpers.
//!
//! Key material crosses the API boundary either as raw bytes or as hex
//! strings (with or without a `0x` prefix). These helpers back the
//! `from_hex` constructors on the key types.

use crate::{CryptoError, Result};

/// Decode a hex string (optionally `0x`-prefixed) into bytes.
///
/// # Errors
///
/// Returns an error if the string has odd length or contains a
/// non-hex character.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(CryptoError::InvalidHexFormat(
            "odd number of hex digits".to_string(),
        ));
    }
    let mut bytes = Vec::with_capacity(s.len() / 2);
    for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
        let hex_pair = std::str::from_utf8(chunk)
            .map_err(|_| CryptoError::InvalidHexFormat("invalid UTF-8 in hex string".to_string()))?;
        let byte = u8::from_str_radix(hex_pair, 16).map_err(|_| {
            CryptoError::InvalidHexFormat(format!("invalid hex character at position {}", i * 2))
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Encode bytes as a lowercase hex string (no prefix).
pub fn encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode("00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_decode_prefixed() {
        assert_eq!(decode("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_uppercase() {
        assert_eq!(decode("ABCD").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_decode_odd_length_fails() {
        assert!(matches!(
            decode("abc"),
            Err(CryptoError::InvalidHexFormat(_))
        ));
    }

    #[test]
    fn test_decode_invalid_char_fails() {
        assert!(matches!(
            decode("zz"),
            Err(CryptoError::InvalidHexFormat(_))
        ));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let bytes = vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }
}
