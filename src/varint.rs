//! The UMP variable length integer encoding.
//!
//! Values are unsigned and capped at 32 bits. The number of leading set bits
//! in the first byte selects the encoded size:
//!
//! ```text
//! 0xxxxxxx                                        1 byte,  value 0-127
//! 10xxxxxx nnnnnnnn                               2 bytes
//! 110xxxxx nnnnnnnn nnnnnnnn                      3 bytes
//! 1110xxxx nnnnnnnn nnnnnnnn nnnnnnnn             4 bytes
//! 1111xxxx nnnnnnnn nnnnnnnn nnnnnnnn nnnnnnnn    5 bytes, little-endian u32
//! ```
//!
//! Every first byte selects a size, so decoding cannot fail; it can only
//! report that more bytes are needed. The 5-byte case diverges from the
//! generic variable-length convention: the low bits of the first byte are
//! discarded instead of being folded into a 35-bit result, so the value is
//! exactly the little-endian u32 read from bytes 2-5.

/// Maximum number of bytes a single encoding can occupy.
pub const MAX_SIZE: usize = 5;

/// A decoded variable length integer together with the number of bytes its
/// encoding occupied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VarInt {
    /// The decoded value.
    pub value: u32,
    /// Encoded size in bytes, 1 to 5.
    pub size: usize,
}

/// Returns the encoded size selected by the first byte. Any first byte of
/// `0xF0` and above opens a 5-byte encoding.
#[inline]
pub fn size_of(first: u8) -> usize {
    match first.leading_ones() {
        0 => 1,
        1 => 2,
        2 => 3,
        3 => 4,
        _ => 5,
    }
}

/// Decodes a variable length integer from the front of `src`.
///
/// `None` means `src` holds fewer bytes than the encoding requires; the
/// caller should retain the bytes and retry once more input arrives.
pub fn decode(src: &[u8]) -> Option<VarInt> {
    let first = *src.first()?;
    let size = size_of(first);
    if src.len() < size {
        return None;
    }

    let value = match size {
        1 => u32::from(first),
        2 => (u32::from(src[1]) << 6) | (u32::from(first) & 0x3f),
        3 => u32::from(src[1]) | (u32::from(src[2]) << 8) | (u32::from(first) & 0x1f),
        4 => {
            u32::from(src[1])
                | (u32::from(src[2]) << 8)
                | (u32::from(src[3]) << 16)
                | (u32::from(first) & 0x0f)
        }
        // The low bits of the first byte carry nothing
        _ => u32::from_le_bytes([src[1], src[2], src[3], src[4]]),
    };

    Some(VarInt { value, size })
}

/// Appends the canonical encoding of `value` to `dst`. Used by the test
/// suites to build streams; producing UMP is otherwise out of scope.
#[cfg(test)]
pub(crate) fn encode(dst: &mut ntex_bytes::BytesMut, value: u32) {
    if value < 0x80 {
        dst.extend_from_slice(&[value as u8]);
    } else if value < 0x4000 {
        dst.extend_from_slice(&[0x80 | (value & 0x3f) as u8, (value >> 6) as u8]);
    } else if value < 0x1_0000 {
        dst.extend_from_slice(&[0xc0, value as u8, (value >> 8) as u8]);
    } else if value < 0x100_0000 {
        dst.extend_from_slice(&[0xe0, value as u8, (value >> 8) as u8, (value >> 16) as u8]);
    } else {
        dst.extend_from_slice(&[0xf0]);
        dst.extend_from_slice(&value.to_le_bytes());
    }
}
