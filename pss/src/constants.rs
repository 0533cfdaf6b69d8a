//! Constants used in the EMSA-PSS encoding.

/// Trailer byte closing every encoded message.
///
/// RFC 8017 fixes the last byte of EM to `0xBC`. It is written after the
/// data block has been masked and checked before any unmasking happens
/// during verification.
pub const TRAILER_BYTE: u8 = 0xBC;

/// Separator byte between the zero padding and the salt inside the data
/// block.
///
/// During verification the first non-zero byte of the unmasked data block
/// must be exactly this value; everything after it is the recovered salt.
pub const SEPARATOR_BYTE: u8 = 0x01;

/// Number of zero bytes prefixed to `digest || salt` when computing H.
///
/// The eight-zero-byte prefix forms the standard's M' construction and
/// domain-separates the PSS hash from a plain hash of the message.
pub(crate) const MPRIME_PREFIX_LEN: usize = 8;
