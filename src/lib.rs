//! A streaming decoder for the UMP (Universal Media Part) wire format.
//!
//! UMP is the self-describing binary format carried in streaming media HTTP
//! responses with the `application/vnd.yt-ump` content type. A response body
//! is a sequence of *parts*, each framed as:
//!
//! ```text
//! +-- varint --+-- varint --+------ payload ------+
//! |    type    |   length   |   `length` octets   |
//! +------------+------------+---------------------+
//! ```
//!
//! Both header fields use the format's own variable-length integer encoding
//! (1-5 bytes, *not* a protobuf varint; see [`varint`]). A part's payload may
//! span several transport chunks; continuation data in later chunks is
//! preceded by a type-20 wrapper part that the decoder validates and strips.
//!
//! This crate handles framing and cross-chunk reassembly only. Payloads are
//! surfaced as opaque byte sequences; decoding the protobuf messages inside
//! `MEDIA_HEADER`, `SABR_ERROR` and friends is left to the caller, as is the
//! HTTP transport that produces the chunks.
//!
//! # Getting started
//!
//! Feed transport chunks to a [`PartDecoder`] as they arrive and call
//! [`finish`](PartDecoder::finish) once the response body ends:
//!
//! ```
//! use ump_codec::PartDecoder;
//!
//! let mut decoder = PartDecoder::default();
//!
//! // type=21 (MEDIA), length=2, payload [0xDE, 0xAD]
//! let parts = decoder.feed(&[0x15, 0x02, 0xDE, 0xAD]).unwrap();
//! assert_eq!(parts.len(), 1);
//! assert_eq!(parts[0].part_type(), ump_codec::part::MEDIA);
//! assert_eq!(&parts[0].payload()[..], &[0xDE, 0xAD]);
//!
//! decoder.finish().unwrap();
//! ```
//!
//! A decoder instance serves exactly one logical response stream. Chunks must
//! be fed in arrival order; parts are yielded in exactly the order their
//! bytes appear in the stream. After a terminal error the decoder refuses
//! further input.

#![cfg_attr(test, deny(warnings))]
#![deny(rust_2018_idioms)]

macro_rules! frame_err {
    ($($msg:tt)+) => {
        log::debug!("framing error -- {};", format_args!($($msg)+))
    };
}

mod config;
mod consts;
mod decoder;
mod error;
mod framer;
mod partial;
mod reassembly;

pub mod part;
pub mod varint;

pub use self::config::{Config, MismatchPolicy};
pub use self::decoder::PartDecoder;
pub use self::error::DecodeError;
pub use self::part::{part_type_name, Part, PartHeader};
pub use self::varint::VarInt;
