use crate::consts;

/// Decoder configuration.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub(crate) max_part_size: u32,
    pub(crate) mismatch: MismatchPolicy,
}

/// What to do when a continuation part's type does not match the partially
/// received part it is supposed to extend.
///
/// Existing UMP clients disagree on this: some fail the stream, some accept
/// the bytes silently. `Strict` is the default because a mismatch usually
/// means the decoder lost framing and would otherwise splice unrelated bytes
/// into a payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Fail the stream with [`PartialTypeMismatch`].
    ///
    /// [`PartialTypeMismatch`]: crate::DecodeError::PartialTypeMismatch
    Strict,
    /// Log a warning and accept the bytes as continuation data anyway.
    Lenient,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create configuration with default values.
    pub fn new() -> Self {
        Config {
            max_part_size: consts::DEFAULT_MAX_PART_SIZE,
            mismatch: MismatchPolicy::Strict,
        }
    }

    /// Sets the largest payload a single part may declare.
    ///
    /// A header declaring more than `size` bytes fails the stream with
    /// [`PartSizeOverflow`] before any payload is buffered. A zero `size`
    /// is clamped to 1, since zero-length parts are always accepted. The
    /// default value is 64Mb.
    ///
    /// [`PartSizeOverflow`]: crate::DecodeError::PartSizeOverflow
    pub fn set_max_part_size(mut self, size: u32) -> Self {
        self.max_part_size = size.max(1);
        self
    }

    /// Sets the continuation type mismatch policy.
    ///
    /// The default is [`MismatchPolicy::Strict`].
    pub fn set_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.mismatch = policy;
        self
    }
}
