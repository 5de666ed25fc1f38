//! ECIES hybrid encryption over secp256k1.
//!
//! Implements the Ethereum-ecosystem ECIES variant so that payloads
//! interoperate byte-for-byte with independently written nodes:
//!
//! 1. Ephemeral secp256k1 key pair per message
//! 2. ECDH with the recipient key; the shared secret is the X coordinate
//! 3. NIST SP 800-56 concatenation KDF (SHA-256, single round) derives
//!    a 16-byte AES-128-CTR key and, via a second SHA-256, a MAC key
//! 4. AES-128-CTR with a random 16-byte IV
//! 5. HMAC-SHA256 over `iv ‖ ciphertext`
//!
//! Wire layout: `ephemeral_pub(65) ‖ iv(16) ‖ ciphertext ‖ mac(32)`.
//! Do not change any field width or order; the format is fixed by the
//! ecosystem, not by this crate.
//!
//! ## Security Notes
//!
//! - The MAC is verified (constant time) before any plaintext is released
//! - The ephemeral private key never leaves this module
//! - CTR provides no integrity on its own; the HMAC is load-bearing

use aes::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use k256::ecdh;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::ecdsa::{PrivateKey, PublicKey, PUBLIC_KEY_SIZE};
use crate::{random, CryptoError, Result};

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

/// Size of the CTR-mode IV in bytes.
pub const IV_SIZE: usize = 16;

/// Size of the HMAC-SHA256 tag in bytes.
pub const MAC_SIZE: usize = 32;

/// Size of the AES-128 encryption key in bytes.
const AES_KEY_SIZE: usize = 16;

/// Fixed per-message overhead: ephemeral key + IV + MAC.
pub const OVERHEAD: usize = PUBLIC_KEY_SIZE + IV_SIZE + MAC_SIZE;

/// Derive the encryption and MAC keys from the ECDH shared secret.
///
/// Concatenation KDF with a single SHA-256 round and counter 1, then
/// `mac_key = SHA-256(km[16..32])`, matching the ecosystem construction.
fn derive_keys(shared_x: &[u8; 32]) -> ([u8; AES_KEY_SIZE], [u8; 32]) {
    let mut hasher = Sha256::new();
    hasher.update(1u32.to_be_bytes());
    hasher.update(shared_x);
    let mut key_material: [u8; 32] = hasher.finalize().into();

    let mut enc_key = [0u8; AES_KEY_SIZE];
    enc_key.copy_from_slice(&key_material[..AES_KEY_SIZE]);

    let mac_key: [u8; 32] = Sha256::digest(&key_material[AES_KEY_SIZE..]).into();

    key_material.zeroize();
    (enc_key, mac_key)
}

/// Compute HMAC-SHA256 over `iv ‖ ciphertext`.
fn compute_mac(mac_key: &[u8; 32], iv: &[u8], ciphertext: &[u8]) -> Result<HmacSha256> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(mac_key)
        .map_err(|_| CryptoError::Encryption("HMAC key setup failed".into()))?;
    mac.update(iv);
    mac.update(ciphertext);
    Ok(mac)
}

/// Encrypt data for the holder of the given public key.
///
/// Returns `ephemeral_pub(65) ‖ iv(16) ‖ ciphertext ‖ mac(32)`.
pub fn encrypt(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let recipient_point = recipient
        .k256_public()
        .map_err(|_| CryptoError::Encryption("invalid recipient public key".into()))?;

    // Fresh ephemeral key per message; dropped at the end of this call.
    let ephemeral = k256::SecretKey::random(&mut OsRng);
    let ephemeral_pub = ephemeral.public_key().to_encoded_point(false);

    let shared = ecdh::diffie_hellman(
        ephemeral.to_nonzero_scalar(),
        recipient_point.as_affine(),
    );
    let mut shared_x = [0u8; 32];
    shared_x.copy_from_slice(shared.raw_secret_bytes());

    let (mut enc_key, mut mac_key) = derive_keys(&shared_x);
    shared_x.zeroize();

    let iv: [u8; IV_SIZE] = random::array();

    let mut ciphertext = plaintext.to_vec();
    let mut cipher = Aes128Ctr::new(&enc_key.into(), &iv.into());
    cipher.apply_keystream(&mut ciphertext);
    enc_key.zeroize();

    let mac = compute_mac(&mac_key, &iv, &ciphertext)?;
    mac_key.zeroize();

    let mut out = Vec::with_capacity(OVERHEAD + ciphertext.len());
    out.extend_from_slice(ephemeral_pub.as_bytes());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out.extend_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Decrypt an ECIES blob with the recipient's private key.
///
/// # Errors
///
/// Returns `CryptoError::Decryption` if the blob is too short, the
/// ephemeral key is not a valid curve point, or the MAC does not verify.
/// The MAC is checked in constant time before plaintext is produced.
pub fn decrypt(private: &PrivateKey, blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < OVERHEAD {
        return Err(CryptoError::Decryption);
    }

    let (ephemeral_bytes, rest) = blob.split_at(PUBLIC_KEY_SIZE);
    let (iv, rest) = rest.split_at(IV_SIZE);
    let (ciphertext, tag) = rest.split_at(rest.len() - MAC_SIZE);

    let ephemeral_point =
        k256::PublicKey::from_sec1_bytes(ephemeral_bytes).map_err(|_| CryptoError::Decryption)?;

    let secret = private.secret_key().map_err(|_| CryptoError::Decryption)?;
    let shared = ecdh::diffie_hellman(secret.to_nonzero_scalar(), ephemeral_point.as_affine());
    let mut shared_x = [0u8; 32];
    shared_x.copy_from_slice(shared.raw_secret_bytes());

    let (mut enc_key, mut mac_key) = derive_keys(&shared_x);
    shared_x.zeroize();

    let mac = compute_mac(&mac_key, iv, ciphertext)?;
    mac_key.zeroize();
    mac.verify_slice(tag).map_err(|_| CryptoError::Decryption)?;

    let mut plaintext = ciphertext.to_vec();
    let mut iv_arr = [0u8; IV_SIZE];
    iv_arr.copy_from_slice(iv);
    let mut cipher = Aes128Ctr::new(&enc_key.into(), &iv_arr.into());
    cipher.apply_keystream(&mut plaintext);
    enc_key.zeroize();

    Ok(plaintext)
}
