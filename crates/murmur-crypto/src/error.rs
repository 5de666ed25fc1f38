//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key generation or parsing failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (invalid ciphertext, MAC, or key).
    #[error("Decryption failed: invalid ciphertext or key")]
    Decryption,

    /// Signing failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Public-key recovery from a signature failed.
    #[error("Signature recovery failed")]
    SignatureRecovery,

    /// Invalid key length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length.
        expected: usize,
        /// Actual key length.
        actual: usize,
    },

    /// Invalid digest length.
    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength {
        /// Expected digest length.
        expected: usize,
        /// Actual digest length.
        actual: usize,
    },

    /// Invalid hex string format.
    #[error("Invalid hex string: {0}")]
    InvalidHexFormat(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
