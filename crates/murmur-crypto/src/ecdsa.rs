//! secp256k1 ECDSA signing with public-key recovery.
//!
//! Signatures are produced over a 32-byte Keccak-256 prehash and carried
//! on the wire as 65 bytes: the 64-byte compact form `r ‖ s` followed by
//! a one-byte recovery id. The recovery id lets a verifier reconstruct
//! the signer's public key from the signature alone, so envelopes never
//! carry the public key explicitly.
//!
//! ## Security Notes
//!
//! - Private keys are zeroized on drop
//! - Signing uses RFC 6979 deterministic nonces (via the `k256` crate)
//! - Signatures are low-S normalized, keeping the recovery id in {0, 1}

use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{hexstr, Digest256, CryptoError, Result};

/// Size of a secp256k1 private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 public key in bytes (0x04 ‖ X ‖ Y).
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Size of a recoverable signature in bytes (r ‖ s ‖ recovery id).
pub const SIGNATURE_SIZE: usize = 65;

/// Size of the compact signature portion in bytes (r ‖ s).
pub const COMPACT_SIGNATURE_SIZE: usize = 64;

/// A secp256k1 private key (32-byte scalar).
///
/// Zeroized on drop. Intentionally not `Clone` to prevent accidental
/// duplication of secret material in memory.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_SIZE],
}

impl PrivateKey {
    /// Generate a new random private key using OS-level entropy.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        bytes.copy_from_slice(&signing_key.to_bytes());
        Self { bytes }
    }

    /// Create a private key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes or is not
    /// a valid curve scalar (zero or ≥ the group order).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        // Reject out-of-range scalars up front rather than at first use.
        SigningKey::from_slice(bytes)
            .map_err(|_| CryptoError::KeyGeneration("invalid secp256k1 scalar".into()))?;
        let mut arr = [0u8; PRIVATE_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Create a private key from a hex string (optionally `0x`-prefixed).
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hexstr::decode(s)?)
    }

    /// Derive the corresponding uncompressed public key.
    pub fn public_key(&self) -> PublicKey {
        // Construction validated the scalar, so this cannot fail.
        let signing_key = SigningKey::from_slice(&self.bytes)
            .expect("scalar validated at construction");
        PublicKey::from_verifying_key(signing_key.verifying_key())
    }

    /// Get the raw key bytes.
    ///
    /// # Security
    ///
    /// Handle with care - this exposes the private key.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.bytes
    }

    pub(crate) fn signing_key(&self) -> Result<SigningKey> {
        SigningKey::from_slice(&self.bytes)
            .map_err(|_| CryptoError::KeyGeneration("invalid secp256k1 scalar".into()))
    }

    pub(crate) fn secret_key(&self) -> Result<k256::SecretKey> {
        k256::SecretKey::from_slice(&self.bytes)
            .map_err(|_| CryptoError::KeyGeneration("invalid secp256k1 scalar".into()))
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// An uncompressed secp256k1 public key (65 bytes, `0x04 ‖ X ‖ Y`).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Create a public key from raw SEC1 uncompressed bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 65 bytes or does
    /// not encode a valid curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        k256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| CryptoError::KeyGeneration("invalid secp256k1 point".into()))?;
        let mut arr = [0u8; PUBLIC_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Create a public key from a hex string (optionally `0x`-prefixed).
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hexstr::decode(s)?)
    }

    /// Get the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.bytes
    }

    /// Convert to owned byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.bytes
    }

    pub(crate) fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        Self { bytes }
    }

    pub(crate) fn k256_public(&self) -> Result<k256::PublicKey> {
        k256::PublicKey::from_sec1_bytes(&self.bytes)
            .map_err(|_| CryptoError::KeyGeneration("invalid secp256k1 point".into()))
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PublicKey(04{:02x}{:02x}..)",
            self.bytes[1], self.bytes[2]
        )
    }
}

/// A recoverable ECDSA signature: `r ‖ s ‖ recovery_id` (65 bytes).
#[derive(Clone, PartialEq, Eq)]
pub struct RecoverableSignature {
    bytes: [u8; SIGNATURE_SIZE],
}

impl RecoverableSignature {
    /// Create a signature from raw wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 65 bytes. The
    /// recovery byte is validated at recovery time, not here, so that
    /// malformed attacker-supplied signatures can still be carried in a
    /// decode result.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; SIGNATURE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the signature as a byte slice.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.bytes
    }

    /// Convert to owned byte array.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.bytes
    }

    /// The recovery id byte (final byte of the wire form).
    pub fn recovery_id(&self) -> u8 {
        self.bytes[SIGNATURE_SIZE - 1]
    }
}

impl std::fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short_hex: String = self.bytes[..8]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        f.debug_struct("RecoverableSignature")
            .field("bytes", &format!("{}...", short_hex))
            .field("recovery_id", &self.recovery_id())
            .finish()
    }
}

/// Sign a 32-byte digest, producing a recoverable signature.
///
/// The signature is deterministic (RFC 6979) and low-S normalized; the
/// recovery id lands in {0, 1}.
pub fn sign_digest(key: &PrivateKey, digest: &Digest256) -> Result<RecoverableSignature> {
    let signing_key = key.signing_key()?;
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest.as_bytes())
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    let mut bytes = [0u8; SIGNATURE_SIZE];
    bytes[..COMPACT_SIGNATURE_SIZE].copy_from_slice(&signature.to_bytes());
    bytes[COMPACT_SIGNATURE_SIZE] = recovery_id.to_byte();
    Ok(RecoverableSignature { bytes })
}

/// Recover the signer's public key from a signature and the digest it
/// was produced over.
///
/// # Errors
///
/// Returns `CryptoError::SignatureRecovery` if the recovery byte is out
/// of range, the compact signature is malformed, or recovery yields no
/// valid curve point.
pub fn recover(signature: &RecoverableSignature, digest: &Digest256) -> Result<PublicKey> {
    let recovery_id = RecoveryId::from_byte(signature.recovery_id())
        .ok_or(CryptoError::SignatureRecovery)?;
    let compact = EcdsaSignature::from_slice(&signature.as_bytes()[..COMPACT_SIGNATURE_SIZE])
        .map_err(|_| CryptoError::SignatureRecovery)?;
    let verifying_key =
        VerifyingKey::recover_from_prehash(digest.as_bytes(), &compact, recovery_id)
            .map_err(|_| CryptoError::SignatureRecovery)?;
    Ok(PublicKey::from_verifying_key(&verifying_key))
}
