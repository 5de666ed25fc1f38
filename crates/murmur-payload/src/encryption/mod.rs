//! Outer encryption wrappers around the clear envelope.
//!
//! Exactly one wrapper is applied per message: AES-256-GCM with a
//! shared symmetric key, or ECIES against the recipient's secp256k1
//! public key. Both produce blobs that decode back to the clear
//! envelope byte-for-byte.

pub mod asymmetric;
pub mod symmetric;

pub use asymmetric::{decrypt_asymmetric, encrypt_asymmetric};
pub use symmetric::{decrypt_symmetric, encrypt_symmetric};
