//! Codec limits and wire-format constants.
//!
//! All wire widths are fixed by the version-1 payload format; changing
//! any of them breaks interoperability with deployed nodes.

/// Block size the clear envelope is padded to, in bytes.
///
/// Every envelope is a positive multiple of this length.
pub const PADDING_TARGET: usize = 256;

/// Size of the flags byte at the start of every envelope.
pub const FLAGS_SIZE: usize = 1;

/// Size of a recoverable signature on the wire (r ‖ s ‖ recovery id).
pub const SIGNATURE_SIZE: usize = murmur_crypto::ecdsa::SIGNATURE_SIZE;

/// Widest size field representable in the two flag bits, in bytes.
pub const MAX_SIZE_FIELD_LEN: usize = 3;

/// Largest payload whose length fits a 3-byte size field.
pub const MAX_PAYLOAD_SIZE: usize = (1 << (8 * MAX_SIZE_FIELD_LEN)) - 1;
