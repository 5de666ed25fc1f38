//! # murmur-payload
//!
//! The version-1 payload codec for murmur messages.
//!
//! [`encode`] turns an application payload plus optional signing key
//! into an opaque, length-padded, authenticated, encrypted byte string;
//! [`decode`] reverses it. The byte layouts are fixed by the deployed
//! protocol and must interoperate with independently written nodes.
//!
//! ## Layers
//!
//! ```text
//! +------------------------------------------------+
//! | codec: encode / decode                         |  façade
//! +------------------------------------------------+
//! | encryption: AES-256-GCM | ECIES (exactly one)  |  outer wrapper
//! +------------------------------------------------+
//! | envelope: flags | size | payload | pad | [sig] |  clear framing
//! +------------------------------------------------+
//! | murmur-crypto primitives                       |  leaf operations
//! +------------------------------------------------+
//! ```
//!
//! ## Example
//!
//! ```
//! use murmur_payload::{decode, encode, DecodeOptions, EncodeOptions, SymmetricKey};
//!
//! let key = SymmetricKey::generate();
//!
//! let encoded = encode(b"hello", &EncodeOptions::symmetric(key.clone())).unwrap();
//! assert_eq!(encoded.bytes.len() % 256, 28); // one block + GCM overhead
//!
//! let decoded = decode(&encoded.bytes, &DecodeOptions::symmetric(key)).unwrap();
//! assert_eq!(decoded.payload, b"hello");
//! ```
//!
//! The codec holds no state: keys are supplied per call and nothing is
//! cached across calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod encryption;
pub mod envelope;
pub mod error;
pub mod limits;

pub use codec::{decode, encode, DecodeOptions, EncodeOptions, EncodedPayload};
pub use encryption::{
    decrypt_asymmetric, decrypt_symmetric, encrypt_asymmetric, encrypt_symmetric,
};
pub use envelope::{clear_decode, clear_encode, DecodedEnvelope, EnvelopeSignature};
pub use error::{PayloadError, Result};

// Key material types, re-exported so callers rarely need murmur-crypto
// directly.
pub use murmur_crypto::{PrivateKey, PublicKey, RecoverableSignature, SymmetricKey};
