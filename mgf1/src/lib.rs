//! Hash-function abstraction and the MGF1 mask generation function.
//!
//! This crate provides the incremental [`MessageHash`] contract used by the
//! PSS encoder, sha2-backed implementations of it, and the MGF1 mask
//! generator (RFC 8017, appendix B.2.1) built on top of it.

mod mask;
mod message_hash;

pub use mask::mgf1_mask;
pub use message_hash::MessageHash;
pub use sha2::{Sha224, Sha256, Sha384, Sha512};
