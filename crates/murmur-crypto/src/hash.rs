//! Keccak-256 hashing primitives.
//!
//! Uses the legacy Keccak-256 permutation (pre-NIST padding), NOT
//! SHA3-256. Signatures over envelopes must interoperate with peers
//! that hash with the Ethereum-ecosystem Keccak-256, and the two
//! digests differ for every input.

use sha3::{Digest, Keccak256};
use subtle::ConstantTimeEq;

use crate::{CryptoError, Result};

/// A 256-bit (32-byte) Keccak-256 digest.
#[derive(Clone, Copy, Default)]
pub struct Digest256([u8; 32]);

impl Digest256 {
    /// Digest size in bytes.
    pub const SIZE: usize = 32;

    /// Create a digest from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(CryptoError::InvalidDigestLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Get the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to owned byte array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Format as hex string.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for byte in &self.0 {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }
}

impl ConstantTimeEq for Digest256 {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Digest256 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest256 {}

impl std::fmt::Debug for Digest256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest256({})", &self.to_hex()[..16])
    }
}

impl std::fmt::Display for Digest256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute the Keccak-256 digest of the input.
pub fn keccak256(data: &[u8]) -> Digest256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    Digest256(arr)
}
