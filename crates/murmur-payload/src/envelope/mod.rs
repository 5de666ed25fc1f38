//! Clear envelope construction and parsing.
//!
//! The clear envelope is the self-describing inner byte string that
//! outer encryption wraps. It carries its own framing (flags + size
//! field), random padding to the 256-byte block target, and an optional
//! recoverable signature.
//!
//! ## Modules
//!
//! - [`flags`]: the flags byte (size-field width + signed bit)
//! - [`padding`]: block padding computation and RNG validation
//! - [`frame`]: `clear_encode` / `clear_decode`

pub mod flags;
pub mod frame;
pub mod padding;

pub use flags::Flags;
pub use frame::{
    clear_decode, clear_encode, compute_size_field_len, DecodedEnvelope, EnvelopeSignature,
};
pub use padding::padding_len;
