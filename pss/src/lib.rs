//! EMSA-PSS (RFC 8017 / PKCS#1 v2.x) message encoding for RSA-style
//! signatures.
//!
//! This library implements the byte-level PSS transform used to pad a
//! message digest before signing and to validate a padded block during
//! verification, using:
//! - A sha2-backed hash function behind the [`mgf1::MessageHash`] contract
//! - MGF1 masking of the data block, seeded with the salted digest
//! - A constant-time comparison of the embedded and recomputed digests
//!
//! # Overview
//!
//! PSS randomizes otherwise-deterministic trapdoor-permutation signatures:
//! - Unforgeability: tampering with any bit of the encoded block breaks
//!   the embedded digest with overwhelming probability
//! - Interoperability: the encoding is bit-for-bit the EMSA-PSS transform
//!   of RFC 8017, so blocks interoperate with other implementations
//! - Side-channel safety: verification rejects through a single boolean
//!   channel and compares digests in constant time
//!
//! # Example
//!
//! ```
//! use mgf1::Sha256;
//! use pss::{EncodingMethod, Pssr};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut pss = Pssr::new(Sha256::default());
//!
//! // Stream the message and produce the digest to pad.
//! pss.update(b"message to sign");
//! let digest = pss.finish_digest().expect("digest");
//!
//! // Pad for a 1024-bit key; the encoder gets one bit less than the
//! // modulus so the block stays below it.
//! let em = pss.encode(&digest, 1023, &mut rng).expect("encode");
//!
//! // The verifier recomputes the digest and checks the block.
//! pss.update(b"message to sign");
//! let digest = pss.finish_digest().expect("digest");
//! assert!(pss.verify(&em, &digest, 1023));
//! ```
//!
//! # Security Considerations
//!
//! - Always draw salts from a cryptographically secure random number
//!   generator (CSRNG)
//! - Verification failures are reported only as `false`, never as an
//!   error, so the rejection channel does not distinguish malformed input
//!   from an ordinary mismatch
//! - The salt length is a construction-time policy; a verifier built with
//!   an exact salt length rejects blocks carrying any other length

mod constants;
mod encoders;
mod errors;
mod padding;


pub use constants::{SEPARATOR_BYTE, TRAILER_BYTE};
pub use encoders::{EncodingMethod, Pssr, PssrRaw};
pub use errors::PssError;
