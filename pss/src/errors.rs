//! Error types for the PSS encoding operations.

use thiserror::Error;

/// Errors raised when a caller misuses the encoding API.
///
/// These are programming or configuration errors, never a property of
/// adversarial input. Verification failures are reported as a plain
/// `false` from `verify` so that the error channel cannot be told apart
/// from an ordinary mismatch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PssError {
    /// The message passed to `encode` is not a digest of the configured
    /// hash function.
    #[error("digest length {actual} does not match hash output length {expected}")]
    DigestLengthMismatch { expected: usize, actual: usize },

    /// The requested output size cannot hold the trailer, digest, salt and
    /// separator byte.
    #[error("output size of {output_bits} bits is too small, need at least {min_bits}")]
    OutputTooSmall { output_bits: usize, min_bits: usize },

    /// The raw adapter's buffered input is not a digest of the configured
    /// hash function.
    #[error("buffered input length {actual} does not match hash output length {expected}")]
    RawLengthMismatch { expected: usize, actual: usize },
}
