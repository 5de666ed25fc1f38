//! Random padding to the 256-byte block target.
//!
//! Every clear envelope is padded with random bytes so its total length
//! is a positive multiple of [`PADDING_TARGET`], hiding the true payload
//! size from traffic analysis.
//!
//! Generated padding is validated before use: a wrong-length or all-zero
//! slice (for paddings longer than three bytes) indicates a broken RNG
//! and aborts the encode rather than shipping predictable padding.

use murmur_crypto::random;

use crate::error::{PayloadError, Result};
use crate::limits::PADDING_TARGET;

/// Paddings at or above this length must contain a non-zero byte.
///
/// Shorter paddings can legitimately be all-zero often enough that the
/// check would reject honest RNG output.
const MIN_RANDOMNESS_CHECK_LEN: usize = 4;

/// Padding length for an envelope of `raw_size` bytes (everything but
/// the padding itself).
///
/// Always in `1..=PADDING_TARGET`: an envelope that already fills a
/// block gets one further full block of padding.
pub fn padding_len(raw_size: usize) -> usize {
    PADDING_TARGET - (raw_size % PADDING_TARGET)
}

/// Generate `len` bytes of validated random padding.
///
/// # Errors
///
/// Returns `PayloadError::PaddingGenerationFailed` if the RNG output
/// has the wrong length or is implausibly all-zero.
pub fn generate(len: usize) -> Result<Vec<u8>> {
    let padding = random::bytes(len);
    validate(&padding, len)?;
    Ok(padding)
}

fn validate(padding: &[u8], expected_len: usize) -> Result<()> {
    if padding.len() != expected_len {
        return Err(PayloadError::PaddingGenerationFailed);
    }
    if expected_len >= MIN_RANDOMNESS_CHECK_LEN && padding.iter().all(|&b| b == 0) {
        return Err(PayloadError::PaddingGenerationFailed);
    }
    Ok(())
}
