//! The MGF1 mask generation function.

use crate::MessageHash;

/// XORs the MGF1 output stream for `seed` into `out`.
///
/// MGF1 produces its stream as `Hash(seed || BE32(0)) || Hash(seed ||
/// BE32(1)) || ...`, truncated to the requested length. The stream is
/// XOR-ed into `out` rather than written over it, so the same call serves
/// both masking and unmasking. The output is a pure function of the seed
/// and length, reproducible bit for bit across implementations.
pub fn mgf1_mask<H: MessageHash + ?Sized>(hash: &mut H, seed: &[u8], out: &mut [u8]) {
    let block_len = hash.output_length();
    let mut counter: u32 = 0;

    for chunk in out.chunks_mut(block_len) {
        hash.update(seed);
        hash.update(&counter.to_be_bytes());
        let block = hash.finish();

        for (o, b) in chunk.iter_mut().zip(block.iter()) {
            *o ^= b;
        }
        counter += 1;
    }
}
