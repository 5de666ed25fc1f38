//! Asymmetric outer encryption (ECIES over secp256k1).
//!
//! Thin wrapper over [`murmur_crypto::ecies`]; the blob layout
//! (`ephemeral_pub ‖ iv ‖ ciphertext ‖ mac`) is fixed there.

use murmur_crypto::{ecies, PrivateKey, PublicKey};

use crate::error::{PayloadError, Result};

/// Encrypt `data` for the holder of `pub_key`.
pub fn encrypt_asymmetric(data: &[u8], pub_key: &PublicKey) -> Result<Vec<u8>> {
    Ok(ecies::encrypt(pub_key, data)?)
}

/// Decrypt an ECIES blob with `priv_key`.
///
/// # Errors
///
/// Returns `DecryptionFailed` on MAC mismatch, an undecodable ephemeral
/// key, or a blob too short to contain the fixed fields.
pub fn decrypt_asymmetric(blob: &[u8], priv_key: &PrivateKey) -> Result<Vec<u8>> {
    ecies::decrypt(priv_key, blob).map_err(|_| PayloadError::DecryptionFailed)
}
