//! UMP part types and the decoded part record.
//!
//! The type-ID registry below is advisory metadata: the decoder surfaces any
//! type it encounters, known or not, and payload interpretation is entirely
//! up to the caller.

use std::fmt;

use ntex_bytes::Bytes;

mod head;

pub use self::head::PartHeader;

/// Size of a part payload as declared by its header.
pub type PartSize = u32;

pub const ONESIE_HEADER: u32 = 10;
pub const ONESIE_DATA: u32 = 11;
pub const ONESIE_ENCRYPTED_MEDIA: u32 = 12;
pub const MEDIA_HEADER: u32 = 20;
pub const MEDIA: u32 = 21;
pub const MEDIA_END: u32 = 22;
pub const LIVE_METADATA: u32 = 31;
pub const LIVE_METADATA_PROMISE: u32 = 33;
pub const LIVE_METADATA_PROMISE_CANCELLATION: u32 = 34;
pub const NEXT_REQUEST_POLICY: u32 = 35;
pub const USTREAMER_VIDEO_AND_FORMAT_DATA: u32 = 36;
pub const FORMAT_SELECTION_CONFIG: u32 = 37;
pub const USTREAMER_SELECTED_MEDIA_STREAM: u32 = 38;
pub const FORMAT_INITIALIZATION_METADATA: u32 = 42;
pub const SABR_REDIRECT: u32 = 43;
pub const SABR_ERROR: u32 = 44;
pub const SABR_SEEK: u32 = 45;
pub const RELOAD_PLAYER_RESPONSE: u32 = 46;
pub const PLAYBACK_START_POLICY: u32 = 47;
pub const ALLOWED_CACHED_FORMATS: u32 = 48;
pub const START_BW_SAMPLING_HINT: u32 = 49;
pub const PAUSE_BW_SAMPLING_HINT: u32 = 50;
pub const SELECTABLE_FORMATS: u32 = 51;
pub const REQUEST_IDENTIFIER: u32 = 52;
pub const REQUEST_CANCELLATION_POLICY: u32 = 53;
pub const ONESIE_PREFETCH_REJECTION: u32 = 54;
pub const TIMELINE_CONTEXT: u32 = 55;
pub const REQUEST_PIPELINING: u32 = 56;
pub const SABR_CONTEXT_UPDATE: u32 = 57;
pub const STREAM_PROTECTION_STATUS: u32 = 58;
pub const SABR_CONTEXT_SENDING_POLICY: u32 = 59;
pub const LAWNMOWER_POLICY: u32 = 60;
pub const SABR_ACK: u32 = 61;
pub const END_OF_TRACK: u32 = 62;
pub const CACHE_LOAD_POLICY: u32 = 63;
pub const LAWNMOWER_MESSAGING_POLICY: u32 = 64;
pub const PREWARM_CONNECTION: u32 = 65;

/// Returns the documented name of a part type ID, for diagnostics.
///
/// Unregistered IDs return `None`; they still decode as opaque parts.
pub fn part_type_name(part_type: u32) -> Option<&'static str> {
    Some(match part_type {
        ONESIE_HEADER => "ONESIE_HEADER",
        ONESIE_DATA => "ONESIE_DATA",
        ONESIE_ENCRYPTED_MEDIA => "ONESIE_ENCRYPTED_MEDIA",
        MEDIA_HEADER => "MEDIA_HEADER",
        MEDIA => "MEDIA",
        MEDIA_END => "MEDIA_END",
        LIVE_METADATA => "LIVE_METADATA",
        LIVE_METADATA_PROMISE => "LIVE_METADATA_PROMISE",
        LIVE_METADATA_PROMISE_CANCELLATION => "LIVE_METADATA_PROMISE_CANCELLATION",
        NEXT_REQUEST_POLICY => "NEXT_REQUEST_POLICY",
        USTREAMER_VIDEO_AND_FORMAT_DATA => "USTREAMER_VIDEO_AND_FORMAT_DATA",
        FORMAT_SELECTION_CONFIG => "FORMAT_SELECTION_CONFIG",
        USTREAMER_SELECTED_MEDIA_STREAM => "USTREAMER_SELECTED_MEDIA_STREAM",
        FORMAT_INITIALIZATION_METADATA => "FORMAT_INITIALIZATION_METADATA",
        SABR_REDIRECT => "SABR_REDIRECT",
        SABR_ERROR => "SABR_ERROR",
        SABR_SEEK => "SABR_SEEK",
        RELOAD_PLAYER_RESPONSE => "RELOAD_PLAYER_RESPONSE",
        PLAYBACK_START_POLICY => "PLAYBACK_START_POLICY",
        ALLOWED_CACHED_FORMATS => "ALLOWED_CACHED_FORMATS",
        START_BW_SAMPLING_HINT => "START_BW_SAMPLING_HINT",
        PAUSE_BW_SAMPLING_HINT => "PAUSE_BW_SAMPLING_HINT",
        SELECTABLE_FORMATS => "SELECTABLE_FORMATS",
        REQUEST_IDENTIFIER => "REQUEST_IDENTIFIER",
        REQUEST_CANCELLATION_POLICY => "REQUEST_CANCELLATION_POLICY",
        ONESIE_PREFETCH_REJECTION => "ONESIE_PREFETCH_REJECTION",
        TIMELINE_CONTEXT => "TIMELINE_CONTEXT",
        REQUEST_PIPELINING => "REQUEST_PIPELINING",
        SABR_CONTEXT_UPDATE => "SABR_CONTEXT_UPDATE",
        STREAM_PROTECTION_STATUS => "STREAM_PROTECTION_STATUS",
        SABR_CONTEXT_SENDING_POLICY => "SABR_CONTEXT_SENDING_POLICY",
        LAWNMOWER_POLICY => "LAWNMOWER_POLICY",
        SABR_ACK => "SABR_ACK",
        END_OF_TRACK => "END_OF_TRACK",
        CACHE_LOAD_POLICY => "CACHE_LOAD_POLICY",
        LAWNMOWER_MESSAGING_POLICY => "LAWNMOWER_MESSAGING_POLICY",
        PREWARM_CONNECTION => "PREWARM_CONNECTION",
        _ => return None,
    })
}

/// A complete UMP part.
///
/// The payload is the raw byte sequence declared by the part header, fully
/// reassembled if it spanned multiple transport chunks.
#[derive(Clone, Eq, PartialEq)]
pub struct Part {
    part_type: u32,
    payload: Bytes,
}

impl Part {
    pub(crate) fn new(part_type: u32, payload: Bytes) -> Self {
        Part { part_type, payload }
    }

    /// Returns the part type ID.
    pub fn part_type(&self) -> u32 {
        self.part_type
    }

    /// Returns the documented name of this part's type, if registered.
    pub fn name(&self) -> Option<&'static str> {
        part_type_name(self.part_type)
    }

    /// Returns a reference to this part's payload.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Consumes `self` and returns the part's payload.
    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = fmt.debug_struct("Part");
        f.field("part_type", &self.part_type);
        if let Some(name) = self.name() {
            f.field("name", &name);
        }
        f.field("payload_len", &self.payload.len());
        // payload bytes purposefully excluded
        f.finish()
    }
}
