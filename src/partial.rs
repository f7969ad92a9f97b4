use ntex_bytes::BytesMut;

use crate::part::Part;

/// A part whose payload has not been fully received yet.
///
/// Exists only while a payload straddles a chunk boundary; the accumulated
/// buffer is always shorter than the declared length, and the moment the two
/// are equal the part is emitted and this state is dropped.
#[derive(Debug)]
pub(crate) struct PartialPart {
    part_type: u32,
    declared_len: u32,
    buf: BytesMut,
}

impl PartialPart {
    pub(crate) fn new(part_type: u32, declared_len: u32, buf: BytesMut) -> Self {
        debug_assert!(buf.len() < declared_len as usize);
        PartialPart {
            part_type,
            declared_len,
            buf,
        }
    }

    pub(crate) fn part_type(&self) -> u32 {
        self.part_type
    }

    /// Bytes still missing from the declared payload length.
    pub(crate) fn remaining(&self) -> usize {
        self.declared_len as usize - self.buf.len()
    }

    pub(crate) fn extend(&mut self, src: &[u8]) {
        debug_assert!(src.len() <= self.remaining());
        self.buf.extend_from_slice(src);
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.buf.len() == self.declared_len as usize
    }

    pub(crate) fn finish(self) -> Part {
        debug_assert!(self.is_complete());
        Part::new(self.part_type, self.buf.freeze())
    }
}
