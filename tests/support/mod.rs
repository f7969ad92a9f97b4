//! Builders for UMP byte streams used across the integration tests.
//! Producing UMP is out of scope for the crate itself, so the tests carry
//! their own writer.
#![allow(dead_code)]

/// Appends the canonical varint encoding of `value` to `out`.
pub fn write_varint(out: &mut Vec<u8>, value: u32) {
    if value < 0x80 {
        out.push(value as u8);
    } else if value < 0x4000 {
        out.push(0x80 | (value & 0x3f) as u8);
        out.push((value >> 6) as u8);
    } else if value < 0x1_0000 {
        out.push(0xc0);
        out.push(value as u8);
        out.push((value >> 8) as u8);
    } else if value < 0x100_0000 {
        out.push(0xe0);
        out.push(value as u8);
        out.push((value >> 8) as u8);
        out.push((value >> 16) as u8);
    } else {
        out.push(0xf0);
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Encoded size of `value`, in bytes.
pub fn varint_len(value: u32) -> usize {
    let mut out = Vec::new();
    write_varint(&mut out, value);
    out.len()
}

/// A complete part: header plus payload.
pub fn part(part_type: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_varint(&mut out, part_type);
    write_varint(&mut out, payload.len() as u32);
    out.extend_from_slice(payload);
    out
}

/// A part header declaring `length` payload bytes, without the payload.
pub fn header(part_type: u32, length: u32) -> Vec<u8> {
    let mut out = Vec::new();
    write_varint(&mut out, part_type);
    write_varint(&mut out, length);
    out
}

/// A continuation chunk prefix: a type-20 wrapper part followed by the
/// continuation part's header. The caller appends the continuation data.
pub fn continuation(cont_type: u32, cont_len: u32) -> Vec<u8> {
    let mut out = part(20, b"wrapper");
    out.extend_from_slice(&header(cont_type, cont_len));
    out
}

/// Deterministic payload pattern for large-segment tests.
pub fn segment_byte(i: usize) -> u8 {
    (i % 251) as u8
}
