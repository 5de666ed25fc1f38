//! Symmetric outer encryption (AES-256-GCM).
//!
//! Wire layout: `ciphertext ‖ tag(16) ‖ iv(12)`.
//!
//! The IV trails the ciphertext. This is the opposite of the common
//! convention, but it is what deployed nodes parse; do not "fix" it.

use murmur_crypto::aead::{self, SymmetricKey, IV_SIZE, TAG_SIZE};

use crate::error::{PayloadError, Result};

/// Encrypt `data` under `key`, appending the GCM tag and then the IV.
pub fn encrypt_symmetric(data: &[u8], key: &SymmetricKey) -> Result<Vec<u8>> {
    let iv = aead::generate_iv();
    let mut blob = aead::encrypt(key, &iv, data)?;
    blob.extend_from_slice(&iv);
    Ok(blob)
}

/// Decrypt a `ciphertext ‖ tag ‖ iv` blob.
///
/// # Errors
///
/// Returns `MalformedEnvelope` if the blob cannot even contain an IV
/// and a tag, and `DecryptionFailed` if authentication fails.
pub fn decrypt_symmetric(blob: &[u8], key: &SymmetricKey) -> Result<Vec<u8>> {
    if blob.len() < IV_SIZE + TAG_SIZE {
        return Err(PayloadError::MalformedEnvelope(format!(
            "symmetric blob of {} bytes is shorter than IV and tag",
            blob.len()
        )));
    }
    let (cipher_and_tag, iv) = blob.split_at(blob.len() - IV_SIZE);
    let mut iv_arr = [0u8; IV_SIZE];
    iv_arr.copy_from_slice(iv);

    aead::decrypt(key, &iv_arr, cipher_and_tag).map_err(|_| PayloadError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let key = SymmetricKey::generate();
        let data = b"symmetric payload";

        let blob = encrypt_symmetric(data, &key).unwrap();
        assert_eq!(blob.len(), data.len() + TAG_SIZE + IV_SIZE);
        assert_eq!(decrypt_symmetric(&blob, &key).unwrap(), data);
    }

    #[test]
    fn test_iv_is_trailing() {
        let key = SymmetricKey::generate();
        let data = b"check iv position";

        let blob = encrypt_symmetric(data, &key).unwrap();
        // Re-assemble with the IV moved to the front: must NOT decrypt,
        // proving the decoder reads it from the tail.
        let iv_start = blob.len() - IV_SIZE;
        let mut leading_iv = blob[iv_start..].to_vec();
        leading_iv.extend_from_slice(&blob[..iv_start]);
        assert!(decrypt_symmetric(&leading_iv, &key).is_err());
    }

    #[test]
    fn test_empty_data_roundtrip() {
        let key = SymmetricKey::generate();
        let blob = encrypt_symmetric(b"", &key).unwrap();
        assert_eq!(blob.len(), TAG_SIZE + IV_SIZE);
        assert_eq!(decrypt_symmetric(&blob, &key).unwrap(), b"");
    }

    #[test]
    fn test_wrong_key_fails() {
        let blob = encrypt_symmetric(b"secret", &SymmetricKey::generate()).unwrap();
        assert!(matches!(
            decrypt_symmetric(&blob, &SymmetricKey::generate()),
            Err(PayloadError::DecryptionFailed)
        ));
    }

    #[test]
    fn test_every_single_byte_flip_fails() {
        let key = SymmetricKey::generate();
        let blob = encrypt_symmetric(b"tamper detection", &key).unwrap();

        for i in 0..blob.len() {
            let mut tampered = blob.clone();
            tampered[i] ^= 0x01;
            assert!(
                decrypt_symmetric(&tampered, &key).is_err(),
                "flip at byte {} not detected",
                i
            );
        }
    }

    #[test]
    fn test_short_blob_is_malformed_not_panic() {
        let key = SymmetricKey::generate();
        for len in 0..IV_SIZE + TAG_SIZE {
            assert!(matches!(
                decrypt_symmetric(&vec![0u8; len], &key),
                Err(PayloadError::MalformedEnvelope(_))
            ));
        }
    }
}
