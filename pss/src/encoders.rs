//! Streaming adapters that feed message bytes to the PSS engine.

use mgf1::MessageHash;
use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::PssError;
use crate::padding::{pss_encode, pss_verify};

/// Draws a fresh random salt, exactly one call into the generator.
fn random_salt(rng: &mut dyn RngCore, len: usize) -> Zeroizing<Vec<u8>> {
    let mut salt = Zeroizing::new(vec![0u8; len]);
    rng.fill_bytes(&mut salt);
    salt
}

/// Shared interface of the two PSS streaming adapters.
///
/// Both variants accumulate message bytes with [`update`], produce the
/// digest to pad with [`finish_digest`], and drive the byte-level transform
/// with [`encode`] and [`verify`]. They differ only in how the digest is
/// obtained: [`Pssr`] computes a running hash, [`PssrRaw`] buffers bytes
/// that must already equal a full digest.
///
/// [`update`]: EncodingMethod::update
/// [`finish_digest`]: EncodingMethod::finish_digest
/// [`encode`]: EncodingMethod::encode
/// [`verify`]: EncodingMethod::verify
pub trait EncodingMethod {
    /// Feeds message bytes into the adapter.
    fn update(&mut self, input: &[u8]);

    /// Produces the digest accumulated so far, resetting the adapter for
    /// the next message.
    fn finish_digest(&mut self) -> Result<Vec<u8>, PssError>;

    /// Pads the digest `msg` into an encoded message of `output_bits` bits,
    /// drawing a fresh salt of the configured length from `rng`.
    fn encode(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>, PssError>;

    /// Checks `coded` against the digest `raw` for a key of `key_bits`
    /// bits, applying the adapter's salt-length policy.
    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool;

    /// Human-readable algorithm identifier, e.g. `EMSA4(SHA-256,MGF1,32)`.
    fn name(&self) -> String;
}

/// The hashing adapter: message bytes stream straight into the hash.
///
/// This is the ordinary PSS front end. [`update`] feeds the owned hash
/// function, [`finish_digest`] finalizes it, and [`encode`]/[`verify`]
/// drive the byte-level transform with the configured salt length.
///
/// [`update`]: EncodingMethod::update
/// [`finish_digest`]: EncodingMethod::finish_digest
/// [`encode`]: EncodingMethod::encode
/// [`verify`]: EncodingMethod::verify
pub struct Pssr<H: MessageHash> {
    hash: H,
    salt_size: usize,
    required_salt_len: bool,
}

impl<H: MessageHash> Pssr<H> {
    /// Creates an adapter whose salt length defaults to the hash output
    /// length and which accepts any recovered salt length at verify time.
    pub fn new(hash: H) -> Self {
        let salt_size = hash.output_length();
        Self {
            hash,
            salt_size,
            required_salt_len: false,
        }
    }

    /// Creates an adapter drawing `salt_size`-byte salts and rejecting
    /// blocks whose recovered salt length differs from it.
    pub fn with_salt_size(hash: H, salt_size: usize) -> Self {
        Self {
            hash,
            salt_size,
            required_salt_len: true,
        }
    }
}

impl<H: MessageHash> EncodingMethod for Pssr<H> {
    fn update(&mut self, input: &[u8]) {
        self.hash.update(input);
    }

    fn finish_digest(&mut self) -> Result<Vec<u8>, PssError> {
        Ok(self.hash.finish())
    }

    fn encode(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>, PssError> {
        let salt = random_salt(rng, self.salt_size);
        pss_encode(&mut self.hash, msg, &salt, output_bits)
    }

    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        let mut salt_size = 0;
        let ok = pss_verify(&mut self.hash, coded, raw, key_bits, &mut salt_size);

        // Checked after the constant-time digest comparison so the policy
        // itself cannot leak timing about the match.
        if self.required_salt_len && salt_size != self.salt_size {
            return false;
        }
        ok
    }

    fn name(&self) -> String {
        format!("EMSA4({},MGF1,{})", self.hash.name(), self.salt_size)
    }
}

/// The raw adapter: message bytes must already equal a full digest.
///
/// [`update`] appends to an internal buffer instead of hashing, and
/// [`finish_digest`] hands the buffer back verbatim, failing unless its
/// length equals the hash output length. The owned hash function is used
/// only for its output-length metadata and for MGF1 masking. This variant
/// serves callers that computed the digest once elsewhere and must reuse
/// it without a second hashing pass.
///
/// [`update`]: EncodingMethod::update
/// [`finish_digest`]: EncodingMethod::finish_digest
pub struct PssrRaw<H: MessageHash> {
    hash: H,
    salt_size: usize,
    required_salt_len: bool,
    msg: Zeroizing<Vec<u8>>,
}

impl<H: MessageHash> PssrRaw<H> {
    /// Creates an adapter whose salt length defaults to the hash output
    /// length and which accepts any recovered salt length at verify time.
    pub fn new(hash: H) -> Self {
        let salt_size = hash.output_length();
        Self {
            hash,
            salt_size,
            required_salt_len: false,
            msg: Zeroizing::new(Vec::new()),
        }
    }

    /// Creates an adapter drawing `salt_size`-byte salts and rejecting
    /// blocks whose recovered salt length differs from it.
    pub fn with_salt_size(hash: H, salt_size: usize) -> Self {
        Self {
            hash,
            salt_size,
            required_salt_len: true,
            msg: Zeroizing::new(Vec::new()),
        }
    }
}

impl<H: MessageHash> EncodingMethod for PssrRaw<H> {
    fn update(&mut self, input: &[u8]) {
        self.msg.extend_from_slice(input);
    }

    fn finish_digest(&mut self) -> Result<Vec<u8>, PssError> {
        let expected = self.hash.output_length();
        if self.msg.len() != expected {
            let actual = self.msg.len();
            // Wipe the rejected buffer in place; it never leaves the wrapper.
            self.msg.zeroize();
            return Err(PssError::RawLengthMismatch { expected, actual });
        }
        Ok(std::mem::take(&mut *self.msg))
    }

    fn encode(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>, PssError> {
        let salt = random_salt(rng, self.salt_size);
        pss_encode(&mut self.hash, msg, &salt, output_bits)
    }

    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        let mut salt_size = 0;
        let ok = pss_verify(&mut self.hash, coded, raw, key_bits, &mut salt_size);

        if self.required_salt_len && salt_size != self.salt_size {
            return false;
        }
        ok
    }

    fn name(&self) -> String {
        format!("PSSR_Raw({},MGF1,{})", self.hash.name(), self.salt_size)
    }
}
