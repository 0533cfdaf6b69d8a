//! The incremental hash-function contract and sha2-backed implementations.

use digest::Digest;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// An incremental hash function with a fixed output length.
///
/// The PSS encoder needs four things from a hash: its output length (which
/// fixes the digest and MGF1 seed sizes), incremental updates, a finalize
/// that resets the state for reuse, and a stable identifier for name
/// strings. The trait is object-safe so callers can also hold a boxed hash.
pub trait MessageHash {
    /// Digest length in bytes.
    fn output_length(&self) -> usize;

    /// Feeds `data` into the running hash state.
    fn update(&mut self, data: &[u8]);

    /// Finalizes the running state, returning the digest and resetting the
    /// state so the instance can be reused.
    fn finish(&mut self) -> Vec<u8>;

    /// Conventional algorithm identifier, e.g. `"SHA-256"`.
    fn name(&self) -> &'static str;
}

macro_rules! message_hash_impl {
    ($hash:ty, $name:literal) => {
        impl MessageHash for $hash {
            fn output_length(&self) -> usize {
                <$hash as Digest>::output_size()
            }

            fn update(&mut self, data: &[u8]) {
                Digest::update(self, data);
            }

            fn finish(&mut self) -> Vec<u8> {
                Digest::finalize_reset(self).to_vec()
            }

            fn name(&self) -> &'static str {
                $name
            }
        }
    };
}

message_hash_impl!(Sha224, "SHA-224");
message_hash_impl!(Sha256, "SHA-256");
message_hash_impl!(Sha384, "SHA-384");
message_hash_impl!(Sha512, "SHA-512");
