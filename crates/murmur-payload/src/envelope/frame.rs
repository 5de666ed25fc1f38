//! Clear envelope framing.
//!
//! Builds and parses the inner envelope that outer encryption wraps:
//!
//! ```text
//! +-------+------------------+---------+-----------+----------------+
//! | flags | size field (1-3) | payload | padding   | signature (65) |
//! | 1 B   | little-endian    | N B     | random    | if signed      |
//! +-------+------------------+---------+-----------+----------------+
//! ```
//!
//! The total length is always a positive multiple of 256 bytes. The
//! size field stores the payload length little-endian in as few bytes
//! as possible; its width is declared in the low two flag bits. A
//! signature, when present, is ECDSA over the Keccak-256 digest of
//! everything before it, so verifiers recover the signer's public key
//! without it ever appearing on the wire.

use murmur_crypto::{
    keccak256, recover, sign_digest, PrivateKey, PublicKey, RecoverableSignature,
};

use crate::envelope::flags::Flags;
use crate::envelope::padding;
use crate::error::{PayloadError, Result};
use crate::limits::{FLAGS_SIZE, MAX_PAYLOAD_SIZE, PADDING_TARGET, SIGNATURE_SIZE};

/// A signature attached to an envelope.
///
/// On encode, `public_key` is always present (derived from the signing
/// key). On decode it is `None` when public-key recovery fails — an
/// attacker-controlled signature must not prevent payload inspection,
/// so recovery failure is reported here instead of as a hard error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvelopeSignature {
    /// The 65-byte recoverable signature as it appears on the wire.
    pub signature: RecoverableSignature,

    /// The signer's uncompressed public key, when known or recoverable.
    pub public_key: Option<PublicKey>,
}

/// The result of decoding a clear envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEnvelope {
    /// The application payload.
    pub payload: Vec<u8>,

    /// The envelope signature, if the signed flag was set.
    pub signature: Option<EnvelopeSignature>,
}

/// Number of bytes needed to store `payload_len` little-endian.
///
/// Returns 1 for lengths below 256, 2 below 65 536, 3 below 16 777 216,
/// and 4 otherwise.
pub fn compute_size_field_len(payload_len: usize) -> usize {
    let mut len = 1;
    while len < 4 && (payload_len as u64) >= 1u64 << (8 * len) {
        len += 1;
    }
    len
}

/// Build a clear envelope around `payload`, optionally signing it.
///
/// Returns the envelope bytes together with the signature record when a
/// signing key was supplied.
///
/// # Errors
///
/// Returns `InvalidParameters` if the payload length does not fit the
/// 3-byte size field (the two flag bits cannot declare a wider one, so
/// a longer payload would produce an envelope no peer can decode), and
/// `PaddingGenerationFailed` if the RNG output fails validation.
pub fn clear_encode(
    payload: &[u8],
    sig_priv_key: Option<&PrivateKey>,
) -> Result<(Vec<u8>, Option<EnvelopeSignature>)> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(PayloadError::InvalidParameters(format!(
            "payload of {} bytes exceeds the {} byte maximum",
            payload.len(),
            MAX_PAYLOAD_SIZE
        )));
    }

    let size_field_len = compute_size_field_len(payload.len());
    let signature_len = if sig_priv_key.is_some() {
        SIGNATURE_SIZE
    } else {
        0
    };

    let mut flags = Flags::new(size_field_len);
    if sig_priv_key.is_some() {
        flags.set_signed();
    }

    let raw_size = FLAGS_SIZE + size_field_len + payload.len() + signature_len;
    let padding_len = padding::padding_len(raw_size);

    let mut envelope = Vec::with_capacity(raw_size + padding_len);
    envelope.push(flags.as_byte());
    envelope.extend_from_slice(&(payload.len() as u32).to_le_bytes()[..size_field_len]);
    envelope.extend_from_slice(payload);
    envelope.extend_from_slice(&padding::generate(padding_len)?);

    let signature = match sig_priv_key {
        Some(key) => {
            // The digest covers flags (signed bit included), size field,
            // payload, and padding - everything before the signature.
            let digest = keccak256(&envelope);
            let signature = sign_digest(key, &digest)?;
            envelope.extend_from_slice(signature.as_bytes());
            Some(EnvelopeSignature {
                signature,
                public_key: Some(key.public_key()),
            })
        }
        None => None,
    };

    debug_assert_eq!(envelope.len() % PADDING_TARGET, 0);
    Ok((envelope, signature))
}

/// Parse a clear envelope back into payload and signature.
///
/// # Errors
///
/// Returns `MalformedEnvelope` if the flags declare a zero-width size
/// field, the declared payload overruns the envelope, or the total
/// length is not a positive multiple of 256. A signature whose public
/// key cannot be recovered is NOT an error; see [`EnvelopeSignature`].
pub fn clear_decode(message: &[u8]) -> Result<DecodedEnvelope> {
    if message.is_empty() || message.len() % PADDING_TARGET != 0 {
        return Err(PayloadError::MalformedEnvelope(format!(
            "length {} is not a positive multiple of {}",
            message.len(),
            PADDING_TARGET
        )));
    }

    let flags = Flags::from_byte(message[0]);
    let size_field_len = flags.size_field_len();
    if size_field_len == 0 {
        return Err(PayloadError::MalformedEnvelope(
            "size-field length of zero".to_string(),
        ));
    }

    let signature_len = if flags.is_signed() { SIGNATURE_SIZE } else { 0 };
    if message.len() < FLAGS_SIZE + size_field_len + signature_len {
        return Err(PayloadError::MalformedEnvelope(
            "envelope too short for declared fields".to_string(),
        ));
    }

    let mut le_bytes = [0u8; 4];
    le_bytes[..size_field_len]
        .copy_from_slice(&message[FLAGS_SIZE..FLAGS_SIZE + size_field_len]);
    let payload_len = u32::from_le_bytes(le_bytes) as usize;

    let payload_start = FLAGS_SIZE + size_field_len;
    let payload_end = payload_start + payload_len;
    if payload_end + signature_len > message.len() {
        return Err(PayloadError::MalformedEnvelope(format!(
            "declared payload length {} exceeds envelope",
            payload_len
        )));
    }
    let payload = message[payload_start..payload_end].to_vec();

    let signature = if flags.is_signed() {
        let signature_start = message.len() - SIGNATURE_SIZE;
        let signature = RecoverableSignature::from_bytes(&message[signature_start..])?;
        let digest = keccak256(&message[..signature_start]);
        let public_key = recover(&signature, &digest).ok();
        Some(EnvelopeSignature {
            signature,
            public_key,
        })
    } else {
        None
    };

    Ok(DecodedEnvelope { payload, signature })
}
