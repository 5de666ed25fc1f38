//! Cryptographically secure random byte generation.
//!
//! All randomness in the codec (padding, IVs, ephemeral keys) comes
//! from the operating system CSPRNG via `OsRng`. Never substitute a
//! seedable or thread-local generator here.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fill a buffer with cryptographically secure random bytes.
pub fn fill(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Generate `len` cryptographically secure random bytes.
pub fn bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Generate a fixed-size array of cryptographically secure random bytes.
pub fn array<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    OsRng.fill_bytes(&mut buf);
    buf
}
