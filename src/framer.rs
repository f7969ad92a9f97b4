use ntex_bytes::BytesMut;

use crate::error::DecodeError;
use crate::part::{Part, PartHeader};
use crate::partial::PartialPart;

/// Extracts complete parts from the front of an accumulated byte buffer.
///
/// The framer handles the normal framing case only; continuation validation
/// across chunk boundaries belongs to the reassembly layer.
#[derive(Debug)]
pub(crate) struct PartFramer {
    max_part_size: u32,
}

/// Outcome of a single framing step.
#[derive(Debug)]
pub(crate) enum Framing {
    /// A complete part was split off the front of the buffer.
    Complete(Part),
    /// The next header cannot be decoded yet; the buffer was left untouched
    /// so header decoding can be retried once more bytes arrive.
    Incomplete,
    /// The declared payload is longer than the buffer. The header and all
    /// remaining bytes were consumed into the returned partial state.
    Partial(PartialPart),
}

impl PartFramer {
    pub(crate) fn new(max_part_size: u32) -> Self {
        PartFramer { max_part_size }
    }

    /// Checks a declared payload length against the configured maximum.
    pub(crate) fn check_size(&self, length: u32) -> Result<(), DecodeError> {
        if length > self.max_part_size {
            frame_err!(
                "declared part size {} exceeds maximum {}",
                length,
                self.max_part_size
            );
            Err(DecodeError::PartSizeOverflow(length))
        } else {
            Ok(())
        }
    }

    /// Attempts to split one part off the front of `src`.
    pub(crate) fn frame(&self, src: &mut BytesMut) -> Result<Framing, DecodeError> {
        let head = match PartHeader::parse(src) {
            Some(head) => head,
            None => return Ok(Framing::Incomplete),
        };
        self.check_size(head.length())?;

        let length = head.length() as usize;
        if src.len() >= head.size() + length {
            let _ = src.split_to(head.size());
            let payload = src.split_to(length).freeze();
            Ok(Framing::Complete(Part::new(head.part_type(), payload)))
        } else {
            // Payload straddles the chunk boundary: keep whatever arrived
            let _ = src.split_to(head.size());
            let partial = PartialPart::new(head.part_type(), head.length(), src.split());
            Ok(Framing::Partial(partial))
        }
    }
}

#[cfg(test)]
mod tests {
    use ntex_bytes::BytesMut;

    use super::*;
    use crate::varint;

    fn framer() -> PartFramer {
        PartFramer::new(1024)
    }

    fn buf(bytes: &[u8]) -> BytesMut {
        let mut src = BytesMut::new();
        src.extend_from_slice(bytes);
        src
    }

    #[test]
    fn complete_part() {
        let mut src = buf(&[0x15, 0x03, 0x01, 0x02, 0x03, 0x16]);
        match framer().frame(&mut src).unwrap() {
            Framing::Complete(part) => {
                assert_eq!(part.part_type(), 21);
                assert_eq!(&part.payload()[..], &[1, 2, 3]);
            }
            other => panic!("unexpected framing; actual={:?}", other),
        }
        // the trailing byte of the next header stays in the buffer
        assert_eq!(&src[..], &[0x16]);
    }

    #[test]
    fn zero_length_part_is_complete_immediately() {
        let mut src = buf(&[0x16, 0x00]);
        match framer().frame(&mut src).unwrap() {
            Framing::Complete(part) => {
                assert_eq!(part.part_type(), 22);
                assert!(part.payload().is_empty());
            }
            other => panic!("unexpected framing; actual={:?}", other),
        }
        assert!(src.is_empty());
    }

    #[test]
    fn split_header_leaves_buffer_untouched() {
        let mut src = buf(&[0x15]);
        assert!(matches!(
            framer().frame(&mut src).unwrap(),
            Framing::Incomplete
        ));
        assert_eq!(&src[..], &[0x15]);

        // multi-byte length varint cut short
        let mut src = buf(&[0x15, 0xe0, 0xa0]);
        assert!(matches!(
            framer().frame(&mut src).unwrap(),
            Framing::Incomplete
        ));
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn short_payload_opens_partial() {
        let mut src = buf(&[0x15, 0x05, 0xaa, 0xbb]);
        match framer().frame(&mut src).unwrap() {
            Framing::Partial(partial) => {
                assert_eq!(partial.part_type(), 21);
                assert_eq!(partial.remaining(), 3);
            }
            other => panic!("unexpected framing; actual={:?}", other),
        }
        assert!(src.is_empty());
    }

    #[test]
    fn oversize_declared_length() {
        let mut src = BytesMut::new();
        varint::encode(&mut src, 21);
        varint::encode(&mut src, 1025);
        assert_eq!(
            framer().frame(&mut src).unwrap_err(),
            DecodeError::PartSizeOverflow(1025)
        );
    }

    #[test]
    fn high_first_byte_is_an_incomplete_five_byte_varint() {
        let mut src = buf(&[0xff, 0x00]);
        assert!(matches!(
            framer().frame(&mut src).unwrap(),
            Framing::Incomplete
        ));
        assert_eq!(src.len(), 2);
    }
}
