use crate::varint::{self, VarInt};

/// A decoded part header: the `(type, length)` varint pair that precedes
/// every part payload.
///
/// Both fields are independently variable-length encoded. The type is always
/// decoded as a full varint even though observed values fit in one byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PartHeader {
    part_type: VarInt,
    length: VarInt,
}

impl PartHeader {
    /// Parses a part header from the front of `src`.
    ///
    /// `None` means either varint is still incomplete; the caller must
    /// retain the raw bytes and retry once more input arrives.
    pub fn parse(src: &[u8]) -> Option<PartHeader> {
        let part_type = varint::decode(src)?;
        let length = varint::decode(&src[part_type.size..])?;
        Some(PartHeader { part_type, length })
    }

    /// Returns the declared part type ID.
    pub fn part_type(&self) -> u32 {
        self.part_type.value
    }

    /// Returns the declared payload length in bytes.
    pub fn length(&self) -> u32 {
        self.length.value
    }

    /// Returns the encoded size of the header itself, 2 to 10 bytes.
    pub fn size(&self) -> usize {
        self.part_type.size + self.length.size
    }
}
