//! Public codec façade: `encode` and `decode`.
//!
//! Composes the clear framing with exactly one outer encryption. The
//! caller picks the outer scheme by supplying either a symmetric key or
//! the counterpart asymmetric key; supplying neither or both is an
//! error, never a silent default.

use murmur_crypto::{PrivateKey, PublicKey, SymmetricKey};

use crate::encryption::{
    decrypt_asymmetric, decrypt_symmetric, encrypt_asymmetric, encrypt_symmetric,
};
use crate::envelope::{clear_decode, clear_encode, DecodedEnvelope, EnvelopeSignature};
use crate::error::{PayloadError, Result};

/// Options controlling [`encode`].
///
/// Exactly one of `asym_pub_key` / `sym_key` must be set. A signing key
/// is optional and independent of the outer scheme.
#[derive(Debug, Default)]
pub struct EncodeOptions {
    /// Sign the envelope with this secp256k1 private key.
    pub sig_priv_key: Option<PrivateKey>,

    /// Encrypt to this recipient public key with ECIES.
    pub asym_pub_key: Option<PublicKey>,

    /// Encrypt with AES-256-GCM under this shared key.
    pub sym_key: Option<SymmetricKey>,
}

impl EncodeOptions {
    /// Options for symmetric encryption under `key`.
    pub fn symmetric(key: SymmetricKey) -> Self {
        Self {
            sym_key: Some(key),
            ..Self::default()
        }
    }

    /// Options for asymmetric encryption to `recipient`.
    pub fn asymmetric(recipient: PublicKey) -> Self {
        Self {
            asym_pub_key: Some(recipient),
            ..Self::default()
        }
    }

    /// Additionally sign the envelope with `key`.
    pub fn with_signing(mut self, key: PrivateKey) -> Self {
        self.sig_priv_key = Some(key);
        self
    }
}

/// Options controlling [`decode`].
///
/// Exactly one of `asym_priv_key` / `sym_key` must be set, matching the
/// scheme the sender used.
#[derive(Debug, Default)]
pub struct DecodeOptions {
    /// Decrypt an ECIES payload with this private key.
    pub asym_priv_key: Option<PrivateKey>,

    /// Decrypt an AES-256-GCM payload under this shared key.
    pub sym_key: Option<SymmetricKey>,
}

impl DecodeOptions {
    /// Options for symmetric decryption under `key`.
    pub fn symmetric(key: SymmetricKey) -> Self {
        Self {
            sym_key: Some(key),
            ..Self::default()
        }
    }

    /// Options for asymmetric decryption with `key`.
    pub fn asymmetric(key: PrivateKey) -> Self {
        Self {
            asym_priv_key: Some(key),
            ..Self::default()
        }
    }
}

/// An encoded payload ready for transmission.
#[derive(Debug)]
pub struct EncodedPayload {
    /// The encrypted wire bytes.
    pub bytes: Vec<u8>,

    /// The envelope signature, when a signing key was supplied.
    pub signature: Option<EnvelopeSignature>,
}

/// Encode `payload` into an opaque, padded, encrypted byte string.
///
/// # Errors
///
/// Returns `InvalidParameters` unless exactly one outer key is set;
/// framing and encryption errors propagate from the lower layers.
pub fn encode(payload: &[u8], opts: &EncodeOptions) -> Result<EncodedPayload> {
    check_exactly_one(opts.asym_pub_key.is_some(), opts.sym_key.is_some())?;

    let (envelope, signature) = clear_encode(payload, opts.sig_priv_key.as_ref())?;

    let bytes = if let Some(key) = &opts.sym_key {
        encrypt_symmetric(&envelope, key)?
    } else if let Some(key) = &opts.asym_pub_key {
        encrypt_asymmetric(&envelope, key)?
    } else {
        unreachable!("checked above")
    };

    Ok(EncodedPayload { bytes, signature })
}

/// Decode wire bytes back into the payload and signature record.
///
/// # Errors
///
/// Returns `InvalidParameters` unless exactly one key is set,
/// `DecryptionFailed` if the outer layer does not authenticate, and
/// `MalformedEnvelope` if the decrypted envelope does not parse.
pub fn decode(bytes: &[u8], opts: &DecodeOptions) -> Result<DecodedEnvelope> {
    check_exactly_one(opts.asym_priv_key.is_some(), opts.sym_key.is_some())?;

    let envelope = if let Some(key) = &opts.sym_key {
        decrypt_symmetric(bytes, key)?
    } else if let Some(key) = &opts.asym_priv_key {
        decrypt_asymmetric(bytes, key)?
    } else {
        unreachable!("checked above")
    };

    clear_decode(&envelope)
}

fn check_exactly_one(has_asym: bool, has_sym: bool) -> Result<()> {
    match (has_asym, has_sym) {
        (true, true) => Err(PayloadError::InvalidParameters(
            "both asymmetric and symmetric keys supplied".to_string(),
        )),
        (false, false) => Err(PayloadError::InvalidParameters(
            "an asymmetric or symmetric key is required".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_roundtrip() {
        let key = SymmetricKey::generate();
        let encoded = encode(b"hello", &EncodeOptions::symmetric(key.clone())).unwrap();

        let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(key)).unwrap();
        assert_eq!(decoded.payload, b"hello");
        assert!(decoded.signature.is_none());
    }

    #[test]
    fn test_asymmetric_roundtrip() {
        let recipient = PrivateKey::generate();
        let encoded = encode(
            b"hello",
            &EncodeOptions::asymmetric(recipient.public_key()),
        )
        .unwrap();

        let decoded = decode(&encoded.bytes, &DecodeOptions::asymmetric(recipient)).unwrap();
        assert_eq!(decoded.payload, b"hello");
    }

    #[test]
    fn test_signed_symmetric_roundtrip() {
        let sym_key = SymmetricKey::generate();
        let sig_key = PrivateKey::generate();
        let expected_pub = sig_key.public_key();

        let encoded = encode(
            b"signed payload",
            &EncodeOptions::symmetric(sym_key.clone()).with_signing(sig_key),
        )
        .unwrap();
        assert_eq!(
            encoded.signature.as_ref().unwrap().public_key,
            Some(expected_pub.clone())
        );

        let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(sym_key)).unwrap();
        assert_eq!(decoded.payload, b"signed payload");
        assert_eq!(decoded.signature.unwrap().public_key, Some(expected_pub));
    }

    #[test]
    fn test_encode_requires_a_key() {
        assert!(matches!(
            encode(b"payload", &EncodeOptions::default()),
            Err(PayloadError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_encode_rejects_both_keys() {
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

    #[test]
    fn test_decode_rejects_both_keys() {
        let opts = DecodeOptions {
            asym_priv_key: Some(PrivateKey::generate()),
            sym_key: Some(SymmetricKey::generate()),
        };
        assert!(matches!(
            decode(&[0u8; 300], &opts),
            Err(PayloadError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_decode_with_wrong_scheme_fails() {
        let sym_key = SymmetricKey::generate();
        let encoded = encode(b"payload", &EncodeOptions::symmetric(sym_key)).unwrap();

        let result = decode(
            &encoded.bytes,
            &DecodeOptions::asymmetric(PrivateKey::generate()),
        );
        assert!(result.is_err());
    }
}
