/// Default cap on a declared part payload. Media segment parts of a few
/// megabytes are routine; anything near this limit indicates a corrupt or
/// hostile stream.
pub(crate) const DEFAULT_MAX_PART_SIZE: u32 = 64 * 1024 * 1024;
