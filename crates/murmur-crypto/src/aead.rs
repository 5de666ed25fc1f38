//! AES-256-GCM symmetric encryption.
//!
//! Provides AEAD encryption with 256-bit keys, 96-bit IVs, and 128-bit
//! authentication tags. The IV is a caller-supplied parameter here; the
//! payload layer decides where it lives on the wire.
//!
//! ## Security Notes
//!
//! - Keys are zeroized on drop
//! - IVs must be randomly generated per encryption (see [`generate_iv`])
//! - NEVER reuse an IV with the same key

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{hexstr, random, CryptoError, Result};

/// Size of symmetric key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// Size of the GCM IV in bytes (96 bits).
pub const IV_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// A 256-bit symmetric key for AES-256-GCM encryption.
///
/// The key is automatically zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Generate a new random symmetric key.
    pub fn generate() -> Self {
        Self {
            bytes: random::array(),
        }
    }

    /// Create a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Create a key from a hex string (optionally `0x`-prefixed).
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hexstr::decode(s)?)
    }

    /// Get the key as a byte slice.
    ///
    /// # Security
    ///
    /// Be careful with this - avoid logging or persisting the returned bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

/// Generate a fresh random 12-byte GCM IV.
pub fn generate_iv() -> [u8; IV_SIZE] {
    random::array()
}

/// Encrypt plaintext with AES-256-GCM under the given key and IV.
///
/// Returns `ciphertext ‖ tag` (the 16-byte tag is appended by the
/// primitive). The IV is NOT included in the output.
pub fn encrypt(key: &SymmetricKey, iv: &[u8; IV_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|_| CryptoError::Encryption("AES-256-GCM encryption failed".into()))
}

/// Decrypt `ciphertext ‖ tag` with AES-256-GCM under the given key and IV.
///
/// # Errors
///
/// Returns `CryptoError::Decryption` if the authentication tag does not
/// verify (tampered ciphertext, wrong key, or wrong IV).
pub fn decrypt(key: &SymmetricKey, iv: &[u8; IV_SIZE], cipher_and_tag: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(Nonce::from_slice(iv), cipher_and_tag)
        .map_err(|_| CryptoError::Decryption)
}
