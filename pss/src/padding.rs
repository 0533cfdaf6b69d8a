//! The byte-level EMSA-PSS encode and verify transforms.

use mgf1::{MessageHash, mgf1_mask};
use subtle::ConstantTimeEq;

use crate::constants::{MPRIME_PREFIX_LEN, SEPARATOR_BYTE, TRAILER_BYTE};
use crate::errors::PssError;

/// Computes `H = Hash(0x00*8 || msg || salt)`, the M' hash of RFC 8017.
fn hash_mprime<H: MessageHash + ?Sized>(hash: &mut H, msg: &[u8], salt: &[u8]) -> Vec<u8> {
    hash.update(&[0u8; MPRIME_PREFIX_LEN]);
    hash.update(msg);
    hash.update(salt);
    hash.finish()
}

/// Pads the digest `msg` into an encoded message of `output_bits` bits.
///
/// The result has length `ceil(output_bits / 8)` and the shape
/// `[masked zero padding || 0x01 || salt] || H || 0xBC`, where the mask is
/// the MGF1 stream seeded with `H = Hash(0x00*8 || msg || salt)` and the
/// top `8 * ceil(output_bits / 8) - output_bits` bits of the first byte are
/// cleared so the block, read as a big-endian integer, fits below the
/// signer's modulus.
///
/// Fails when `msg` is not a digest of `hash` or when `output_bits` cannot
/// hold the trailer, digest, salt and separator.
pub(crate) fn pss_encode<H: MessageHash + ?Sized>(
    hash: &mut H,
    msg: &[u8],
    salt: &[u8],
    output_bits: usize,
) -> Result<Vec<u8>, PssError> {
    let hash_size = hash.output_length();
    let salt_size = salt.len();

    if msg.len() != hash_size {
        return Err(PssError::DigestLengthMismatch {
            expected: hash_size,
            actual: msg.len(),
        });
    }

    let min_bits = 8 * hash_size + 8 * salt_size + 9;
    if output_bits < min_bits {
        return Err(PssError::OutputTooSmall {
            output_bits,
            min_bits,
        });
    }

    let output_length = output_bits.div_ceil(8);
    let h = hash_mprime(hash, msg, salt);

    let mut em = vec![0u8; output_length];
    em[output_length - hash_size - salt_size - 2] = SEPARATOR_BYTE;
    em[output_length - 1 - hash_size - salt_size..output_length - 1 - hash_size]
        .copy_from_slice(salt);
    mgf1_mask(hash, &h, &mut em[..output_length - hash_size - 1]);
    em[0] &= 0xFF >> (8 * output_length - output_bits);
    em[output_length - 1 - hash_size..output_length - 1].copy_from_slice(&h);
    em[output_length - 1] = TRAILER_BYTE;

    Ok(em)
}

/// Checks the encoded block `coded` against the digest `message_hash` for a
/// key of `key_bits` bits.
///
/// Every failure returns `false`, never an error: the verifier's input is
/// fully attacker-controlled and the rejection channel must look the same
/// as an ordinary mismatch. The final comparison of the embedded H against
/// the recomputed H runs in constant time over the full digest length. The
/// separator scan over the unmasked padding is not constant time with
/// respect to the salt position; the padding and salt position are
/// recoverable from the block by anyone, so this leaks nothing secret.
///
/// On success, the recovered salt length is written to `out_salt_size`.
pub(crate) fn pss_verify<H: MessageHash + ?Sized>(
    hash: &mut H,
    coded: &[u8],
    message_hash: &[u8],
    key_bits: usize,
    out_salt_size: &mut usize,
) -> bool {
    let hash_size = hash.output_length();
    let key_bytes = key_bits.div_ceil(8);

    if key_bits < 8 * hash_size + 9 {
        return false;
    }
    if message_hash.len() != hash_size {
        return false;
    }
    if coded.len() > key_bytes || coded.len() <= 1 {
        return false;
    }
    if coded[coded.len() - 1] != TRAILER_BYTE {
        return false;
    }

    // Big-integer conversion strips leading zero bytes; restore them.
    let mut buf = vec![0u8; key_bytes];
    buf[key_bytes - coded.len()..].copy_from_slice(coded);

    // The representation must not carry more significant bits than the
    // claimed key size allows.
    let top_bits = 8 * key_bytes - key_bits;
    if top_bits > buf[0].leading_zeros() as usize {
        return false;
    }

    let db_size = key_bytes - hash_size - 1;
    let (db, rest) = buf.split_at_mut(db_size);
    let h = &rest[..hash_size];

    // XOR is self-inverse, so applying the mask again unmasks the block.
    mgf1_mask(hash, h, db);
    db[0] &= 0xFF >> top_bits;

    let mut salt_offset = 0;
    for (i, &byte) in db.iter().enumerate() {
        if byte == SEPARATOR_BYTE {
            salt_offset = i + 1;
            break;
        }
        if byte != 0 {
            return false;
        }
    }
    if salt_offset == 0 {
        return false;
    }

    let salt = &db[salt_offset..];
    let h2 = hash_mprime(hash, message_hash, salt);

    let ok = bool::from(h.ct_eq(&h2));
    if ok {
        *out_salt_size = salt.len();
    }
    ok
}
