//! End-to-end tests for the payload codec.
//!
//! Exercises the public façade the way a node would: encode with one
//! outer scheme, ship the bytes, decode on the other side, and check
//! the framing invariants that peers depend on.

use murmur_payload::limits::PADDING_TARGET;
use murmur_payload::{
    decode, encode, DecodeOptions, EncodeOptions, PayloadError, PrivateKey, SymmetricKey,
};

// ============================================================================
// Concrete scenarios
// ============================================================================

mod scenarios {
    use super::*;

    fn fixed_sym_key() -> SymmetricKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x01;
        SymmetricKey::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn small_symmetric_payload_is_one_padded_block() {
        let key = fixed_sym_key();
        let encoded = encode(b"hello", &EncodeOptions::symmetric(key.clone())).unwrap();

        // One 256-byte envelope plus the 28-byte GCM overhead
        assert!(encoded.bytes.len() >= PADDING_TARGET);
        assert_eq!(encoded.bytes.len() - 28, PADDING_TARGET);

        let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(key)).unwrap();
        assert_eq!(decoded.payload, b"hello");
    }

    #[test]
    fn payload_over_one_block_spills_into_two() {
        let key = SymmetricKey::generate();
        let payload = vec![b'A'; 300];

        let encoded = encode(&payload, &EncodeOptions::symmetric(key.clone())).unwrap();
        assert_eq!(encoded.bytes.len() - 28, 2 * PADDING_TARGET);

        let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(key)).unwrap();
        assert_eq!(decoded.payload, payload);
    }

    #[test]
    fn tampering_with_any_byte_fails_decryption() {
        let key = fixed_sym_key();
        let encoded = encode(b"hello", &EncodeOptions::symmetric(key.clone())).unwrap();

        for i in 0..encoded.bytes.len() {
            let mut tampered = encoded.bytes.clone();
            tampered[i] ^= 0x01;
            let result = decode(&tampered, &DecodeOptions::symmetric(key.clone()));
            assert!(
                matches!(result, Err(PayloadError::DecryptionFailed)),
                "flip at byte {} not rejected",
                i
            );
        }
    }

    #[test]
    fn supplying_both_outer_keys_is_invalid() {
        let opts = EncodeOptions {
            sig_priv_key: None,
            asym_pub_key: Some(PrivateKey::generate().public_key()),
            sym_key: Some(SymmetricKey::generate()),
        };
        assert!(matches!(
            encode(b"payload", &opts),
            Err(PayloadError::InvalidParameters(_))
        ));
    }
}

// ============================================================================
// Boundary payload lengths
// ============================================================================

mod boundaries {
    use super::*;

    /// Payload lengths around every size-field transition.
    const LENGTHS: &[usize] = &[0, 1, 255, 256, 257, 65_535, 65_536];

    #[test]
    fn symmetric_roundtrip_at_boundaries() {
        let key = SymmetricKey::generate();

        for &len in LENGTHS {
            let payload = vec![0xA5u8; len];
            let encoded = encode(&payload, &EncodeOptions::symmetric(key.clone())).unwrap();

            // Envelope under the GCM overhead is a positive block multiple
            let envelope_len = encoded.bytes.len() - 28;
            assert_eq!(envelope_len % PADDING_TARGET, 0, "len={len}");
            assert!(envelope_len >= PADDING_TARGET);

            let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(key.clone())).unwrap();
            assert_eq!(decoded.payload, payload, "len={len}");
        }
    }

    #[test]
    fn signed_symmetric_roundtrip_at_boundaries() {
        let sym_key = SymmetricKey::generate();
        let sig_key = PrivateKey::generate();
        let expected_pub = sig_key.public_key();

        for &len in LENGTHS {
            let payload = vec![0x5Au8; len];
            let opts = EncodeOptions {
                sig_priv_key: Some(PrivateKey::from_bytes(sig_key.as_bytes()).unwrap()),
                asym_pub_key: None,
                sym_key: Some(sym_key.clone()),
            };
            let encoded = encode(&payload, &opts).unwrap();

            let decoded =
                decode(&encoded.bytes, &DecodeOptions::symmetric(sym_key.clone())).unwrap();
            assert_eq!(decoded.payload, payload, "len={len}");
            assert_eq!(
                decoded.signature.unwrap().public_key,
                Some(expected_pub.clone()),
                "len={len}"
            );
        }
    }

    #[test]
    fn asymmetric_roundtrip_at_boundaries() {
        let recipient = PrivateKey::generate();
        let recipient_pub = recipient.public_key();

        for &len in &[0usize, 1, 255, 256, 257] {
            let payload = vec![0x3Cu8; len];
            let encoded =
                encode(&payload, &EncodeOptions::asymmetric(recipient_pub.clone())).unwrap();

            let opts = DecodeOptions {
                asym_priv_key: Some(PrivateKey::from_bytes(recipient.as_bytes()).unwrap()),
                sym_key: None,
            };
            let decoded = decode(&encoded.bytes, &opts).unwrap();
            assert_eq!(decoded.payload, payload, "len={len}");
        }
    }
}

// ============================================================================
// Randomization and signing
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn independent_encodings_of_same_payload_differ() {
        let key = SymmetricKey::generate();

        let a = encode(b"identical input", &EncodeOptions::symmetric(key.clone())).unwrap();
        let b = encode(b"identical input", &EncodeOptions::symmetric(key.clone())).unwrap();
        assert_ne!(a.bytes, b.bytes);

        // Both still decode to the same payload
        let pa = decode(&a.bytes, &DecodeOptions::symmetric(key.clone())).unwrap();
        let pb = decode(&b.bytes, &DecodeOptions::symmetric(key)).unwrap();
        assert_eq!(pa.payload, pb.payload);
    }

    #[test]
    fn independent_asymmetric_encodings_differ() {
        let recipient = PrivateKey::generate();

        let a = encode(b"same", &EncodeOptions::asymmetric(recipient.public_key())).unwrap();
        let b = encode(b"same", &EncodeOptions::asymmetric(recipient.public_key())).unwrap();
        assert_ne!(a.bytes, b.bytes);
    }

    #[test]
    fn signed_asymmetric_payload_carries_recoverable_signer() {
        let recipient = PrivateKey::generate();
        let signer = PrivateKey::generate();
        let signer_pub = signer.public_key();

        let encoded = encode(
            b"authenticated message",
            &EncodeOptions::asymmetric(recipient.public_key()).with_signing(signer),
        )
        .unwrap();

        let decoded = decode(&encoded.bytes, &DecodeOptions::asymmetric(recipient)).unwrap();
        assert_eq!(decoded.payload, b"authenticated message");
        assert_eq!(decoded.signature.unwrap().public_key, Some(signer_pub));
    }

    #[test]
    fn decoding_with_wrong_symmetric_key_fails() {
        let encoded = encode(
            b"for someone else",
            &EncodeOptions::symmetric(SymmetricKey::generate()),
        )
        .unwrap();

        let result = decode(
            &encoded.bytes,
            &DecodeOptions::symmetric(SymmetricKey::generate()),
        );
        assert!(matches!(result, Err(PayloadError::DecryptionFailed)));
    }

    #[test]
    fn truncated_symmetric_payload_is_malformed() {
        let key = SymmetricKey::generate();
        let result = decode(&[0u8; 5], &DecodeOptions::symmetric(key));
        assert!(matches!(result, Err(PayloadError::MalformedEnvelope(_))));
    }
}
