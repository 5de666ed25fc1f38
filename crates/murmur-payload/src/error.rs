//! Error types for payload codec operations.

use thiserror::Error;

/// Errors that can occur while encoding or decoding payloads.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Invalid or inconsistent caller-supplied parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The RNG produced unusable padding bytes.
    #[error("Padding generation failed")]
    PaddingGenerationFailed,

    /// The envelope does not parse as a version-1 payload.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Outer decryption failed (wrong key or tampered ciphertext).
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Cryptographic error.
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] murmur_crypto::CryptoError),
}

/// Result type for payload codec operations.
pub type Result<T> = std::result::Result<T, PayloadError>;
