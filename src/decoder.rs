use crate::config::Config;
use crate::error::DecodeError;
use crate::part::Part;
use crate::reassembly::ReassemblyBuffer;

/// Streaming UMP part decoder.
///
/// One decoder serves one logical response stream. Feed transport chunks in
/// arrival order with [`feed`](Self::feed) and call
/// [`finish`](Self::finish) after the last one to detect truncation.
///
/// All work is synchronous: `feed` never blocks and performs no I/O, so
/// independent decoders can run concurrently, one per stream. Any terminal
/// error latches the decoder; further calls return [`DecodeError::Failed`].
#[derive(Debug)]
pub struct PartDecoder {
    buffer: ReassemblyBuffer,
    failed: bool,
}

impl Default for PartDecoder {
    fn default() -> Self {
        PartDecoder::new()
    }
}

impl PartDecoder {
    /// Creates a decoder with the default [`Config`].
    pub fn new() -> Self {
        PartDecoder::with_config(Config::new())
    }

    /// Creates a decoder with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        PartDecoder {
            buffer: ReassemblyBuffer::new(&config),
            failed: false,
        }
    }

    /// Pushes one transport chunk through the decoder.
    ///
    /// Returns every part completed by this chunk, in the order their bytes
    /// appear in the stream. An empty vec just means the chunk ended inside
    /// a header or payload; the bytes are retained for the next call.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<Part>, DecodeError> {
        if self.failed {
            return Err(DecodeError::Failed);
        }
        log::trace!(
            "feeding {}B chunk onto {}B leftover",
            chunk.len(),
            self.buffer.leftover()
        );

        let mut parts = Vec::new();
        match self.buffer.consume_chunk(chunk, &mut parts) {
            Ok(()) => Ok(parts),
            Err(err) => {
                self.failed = true;
                Err(err)
            }
        }
    }

    /// Signals the end of the stream.
    ///
    /// Fails with [`DecodeError::TruncatedStream`] if a part payload is
    /// still being assembled or undecodable header bytes remain buffered.
    pub fn finish(&mut self) -> Result<(), DecodeError> {
        if self.failed {
            return Err(DecodeError::Failed);
        }
        if self.buffer.is_drained() {
            Ok(())
        } else {
            frame_err!(
                "stream ended with {}B undecoded or a part open",
                self.buffer.leftover()
            );
            self.failed = true;
            Err(DecodeError::TruncatedStream)
        }
    }
}
