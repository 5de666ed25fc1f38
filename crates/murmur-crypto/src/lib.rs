//! # murmur-crypto
//!
//! Cryptographic primitives for the murmur version-1 payload codec.
//!
//! This crate provides the leaf operations the payload layers compose:
//!
//! - **Hashing**: legacy Keccak-256 (Ethereum-ecosystem, not SHA3)
//! - **Randomness**: OS CSPRNG helpers for padding, IVs, and keys
//! - **Symmetric Encryption**: AES-256-GCM with detached 12-byte IVs
//! - **Signatures**: secp256k1 ECDSA with public-key recovery
//! - **Hybrid Encryption**: ECIES over secp256k1 (fixed ecosystem layout)
//!
//! ## Security
//!
//! All secret key material implements `Zeroize` for memory cleanup and
//! redacts itself from `Debug` output. MAC comparisons are constant
//! time. Nothing in this crate logs.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod aead;
pub mod ecdsa;
pub mod ecies;
pub mod error;
pub mod hash;
pub mod hexstr;
pub mod random;

pub use aead::SymmetricKey;
pub use ecdsa::{recover, sign_digest, PrivateKey, PublicKey, RecoverableSignature};
pub use error::{CryptoError, Result};
pub use hash::{keccak256, Digest256};
