/// Errors that can occur while decoding a UMP part stream.
///
/// All variants are terminal for the stream: once `feed` or `finish` returns
/// one of these, the decoder latches into a failed state and rejects further
/// calls with [`DecodeError::Failed`]. Running out of buffered bytes is not
/// an error; it is absorbed into retained leftover state internally.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A part header declared a payload longer than the configured maximum
    /// part size.
    #[error("Declared part size {0} exceeds the configured maximum")]
    PartSizeOverflow(u32),

    /// The continuation part following a chunk boundary did not carry the
    /// same type as the partially received part it was supposed to extend.
    ///
    /// Only produced in [`MismatchPolicy::Strict`] mode; lenient mode logs a
    /// warning and accepts the bytes instead.
    ///
    /// [`MismatchPolicy::Strict`]: crate::MismatchPolicy::Strict
    #[error("Continuation part type {actual} does not match partial part type {expected}")]
    PartialTypeMismatch {
        /// Type of the part whose payload is still being assembled.
        expected: u32,
        /// Type declared by the continuation part header.
        actual: u32,
    },

    /// `finish` was called while a part payload was still being assembled,
    /// or while undecodable header bytes remained buffered. The transport
    /// ended prematurely.
    #[error("Stream ended inside a part or part header")]
    TruncatedStream,

    /// The decoder already failed with a terminal error and cannot be
    /// reused.
    #[error("Decoder is in failed state")]
    Failed,
}
