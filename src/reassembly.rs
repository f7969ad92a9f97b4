use ntex_bytes::BytesMut;

use crate::config::{Config, MismatchPolicy};
use crate::error::DecodeError;
use crate::framer::{Framing, PartFramer};
use crate::part::{Part, PartHeader};
use crate::partial::PartialPart;

/// Part type that wraps the continuation data of a partial part in each
/// subsequent chunk. The ID coincides with `MEDIA_HEADER` in the registry.
const CONTINUATION_WRAPPER: u32 = 20;

/// Cross-chunk decoder state: unconsumed bytes from the previous chunk plus
/// at most one partially received part.
///
/// New chunk bytes are stitched onto the leftover region before framing, so
/// a header split across a chunk boundary is simply retried once more bytes
/// arrive. A payload split across a boundary becomes a [`PartialPart`] and
/// is driven forward by the continuation protocol below.
#[derive(Debug)]
pub(crate) struct ReassemblyBuffer {
    framer: PartFramer,
    mismatch: MismatchPolicy,
    buf: BytesMut,
    partial: Option<PartialPart>,
}

impl ReassemblyBuffer {
    pub(crate) fn new(config: &Config) -> Self {
        ReassemblyBuffer {
            framer: PartFramer::new(config.max_part_size),
            mismatch: config.mismatch,
            buf: BytesMut::new(),
            partial: None,
        }
    }

    /// True when no leftover bytes and no partial part remain.
    pub(crate) fn is_drained(&self) -> bool {
        self.buf.is_empty() && self.partial.is_none()
    }

    /// Number of bytes retained for the next chunk.
    pub(crate) fn leftover(&self) -> usize {
        self.buf.len()
    }

    /// Pushes one chunk through the reassembly pipeline, appending every
    /// part it completes to `dst` in stream order.
    pub(crate) fn consume_chunk(
        &mut self,
        chunk: &[u8],
        dst: &mut Vec<Part>,
    ) -> Result<(), DecodeError> {
        // Stitch the new chunk onto any leftover from the previous one
        self.buf.extend_from_slice(chunk);

        loop {
            if let Some(partial) = self.partial.take() {
                if let Some(open) = self.resolve_partial(partial, dst)? {
                    self.partial = Some(open);
                    return Ok(());
                }
            }
            match self.framer.frame(&mut self.buf)? {
                Framing::Complete(part) => dst.push(part),
                Framing::Incomplete => return Ok(()),
                Framing::Partial(partial) => self.partial = Some(partial),
            }
        }
    }

    /// Drives an open partial part forward through the continuation
    /// protocol: a type-20 wrapper part, then a part restating the open
    /// part's type, whose payload extends the open part.
    ///
    /// Returns the partial back if it still needs bytes, `None` once it
    /// completed and was pushed to `dst`.
    fn resolve_partial(
        &mut self,
        mut partial: PartialPart,
        dst: &mut Vec<Part>,
    ) -> Result<Option<PartialPart>, DecodeError> {
        loop {
            if partial.is_complete() {
                log::trace!("completed partial part {}", partial.part_type());
                dst.push(partial.finish());
                return Ok(None);
            }
            if self.buf.is_empty() {
                return Ok(Some(partial));
            }

            let head = match PartHeader::parse(&self.buf) {
                Some(head) => head,
                // Header split across chunks; retry on the next feed
                None => return Ok(Some(partial)),
            };

            let (cont, wrapper_len) = if head.part_type() == CONTINUATION_WRAPPER {
                self.framer.check_size(head.length())?;
                // The wrapper must be wholly buffered before the
                // continuation header behind it can be read
                let wrapper_len = head.size() + head.length() as usize;
                if self.buf.len() < wrapper_len {
                    return Ok(Some(partial));
                }
                match PartHeader::parse(&self.buf[wrapper_len..]) {
                    Some(cont) => (cont, wrapper_len),
                    None => return Ok(Some(partial)),
                }
            } else {
                (head, 0)
            };

            if cont.part_type() == partial.part_type() {
                if wrapper_len > 0 {
                    let wrapper = self.buf.split_to(wrapper_len);
                    log::trace!("skipping {}B continuation wrapper part", wrapper.len());
                } else {
                    log::debug!(
                        "continuation of part {} arrived without a wrapper part",
                        partial.part_type()
                    );
                }
                let _ = self.buf.split_to(cont.size());

                // The continuation's own declared length is a sanity bound
                // only; the originally declared total length governs
                // completion.
                let claim = cont.length() as usize;
                if claim > partial.remaining() {
                    log::debug!(
                        "continuation part claims {}B, {}B remain; capping",
                        claim,
                        partial.remaining()
                    );
                }
                let take = claim.min(partial.remaining()).min(self.buf.len());
                let bytes = self.buf.split_to(take);
                partial.extend(&bytes);
            } else {
                match self.mismatch {
                    MismatchPolicy::Strict => {
                        frame_err!(
                            "expected continuation of part {}, got part {}",
                            partial.part_type(),
                            cont.part_type()
                        );
                        return Err(DecodeError::PartialTypeMismatch {
                            expected: partial.part_type(),
                            actual: cont.part_type(),
                        });
                    }
                    // Well-formed framing with the wrong type: keep the
                    // continuation payload, drop the framing bytes
                    MismatchPolicy::Lenient if wrapper_len > 0 => {
                        log::warn!(
                            "accepting mismatched continuation part {} for open part {}",
                            cont.part_type(),
                            partial.part_type()
                        );
                        let _ = self.buf.split_to(wrapper_len + cont.size());
                        let take = (cont.length() as usize)
                            .min(partial.remaining())
                            .min(self.buf.len());
                        let bytes = self.buf.split_to(take);
                        partial.extend(&bytes);
                    }
                    // No wrapper: usually the producer continued the payload
                    // without framing, so the "header" is payload data
                    MismatchPolicy::Lenient => self.accept_raw(&mut partial),
                }
            }
        }
    }

    /// Lenient fallback: treat the buffered bytes themselves as payload
    /// continuation, would-be header bytes included.
    fn accept_raw(&mut self, partial: &mut PartialPart) {
        let take = partial.remaining().min(self.buf.len());
        log::warn!(
            "accepting {}B of unframed continuation data for part {}",
            take,
            partial.part_type()
        );
        let bytes = self.buf.split_to(take);
        partial.extend(&bytes);
    }
}
