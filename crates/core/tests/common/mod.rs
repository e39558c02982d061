//! Test fixture writer for ASEF files.
//!
//! Builds headers and blocks byte by byte; the library itself has no
//! encoder.

#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};

pub const COLOR_START: u16 = 0x0001;
pub const GROUP_START: u16 = 0xC001;
pub const GROUP_END: u16 = 0xC002;

/// Name field: unit count (with terminator), UTF-16BE units, terminator.
pub fn name_field(name: &str) -> Vec<u8> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let mut out = Vec::new();
    out.write_u16::<BigEndian>(units.len() as u16 + 1).unwrap();
    for unit in units {
        out.write_u16::<BigEndian>(unit).unwrap();
    }
    out.write_u16::<BigEndian>(0).unwrap();
    out
}

/// Color block payload: name, 4-byte model tag, channels, type code.
pub fn color_payload(name: &str, model: &[u8; 4], channels: &[f32], type_code: u16) -> Vec<u8> {
    let mut out = name_field(name);
    out.extend_from_slice(model);
    for &c in channels {
        out.write_f32::<BigEndian>(c).unwrap();
    }
    out.write_u16::<BigEndian>(type_code).unwrap();
    out
}

/// Header for `block_count` blocks at version `major.minor`.
pub fn header(major: u16, minor: u16, block_count: u32) -> Vec<u8> {
    let mut out = b"ASEF".to_vec();
    out.write_u16::<BigEndian>(major).unwrap();
    out.write_u16::<BigEndian>(minor).unwrap();
    out.write_u32::<BigEndian>(block_count).unwrap();
    out
}

/// Accumulates blocks and counts them for the header.
#[derive(Debug, Clone)]
pub struct SwatchBuilder {
    major: u16,
    minor: u16,
    blocks: Vec<u8>,
    count: u32,
}

impl Default for SwatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SwatchBuilder {
    pub fn new() -> Self {
        Self {
            major: 1,
            minor: 0,
            blocks: Vec::new(),
            count: 0,
        }
    }

    pub fn version(mut self, major: u16, minor: u16) -> Self {
        self.major = major;
        self.minor = minor;
        self
    }

    /// Block with a correct length field.
    pub fn block(self, tag: u16, payload: &[u8]) -> Self {
        let len = payload.len() as u32;
        self.block_with_length(tag, len, payload)
    }

    /// Block with an arbitrary declared length.
    pub fn block_with_length(mut self, tag: u16, declared: u32, payload: &[u8]) -> Self {
        self.blocks.write_u16::<BigEndian>(tag).unwrap();
        self.blocks.write_u32::<BigEndian>(declared).unwrap();
        self.blocks.extend_from_slice(payload);
        self.count += 1;
        self
    }

    pub fn color(self, name: &str, model: &[u8; 4], channels: &[f32], type_code: u16) -> Self {
        let payload = color_payload(name, model, channels, type_code);
        self.block(COLOR_START, &payload)
    }

    pub fn rgb(self, name: &str, r: f32, g: f32, b: f32) -> Self {
        self.color(name, b"RGB ", &[r, g, b], 2)
    }

    pub fn group_start(self, name: &str) -> Self {
        let payload = name_field(name);
        self.block(GROUP_START, &payload)
    }

    pub fn group_end(self) -> Self {
        self.block(GROUP_END, &[])
    }

    /// Append bytes verbatim, outside any block.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.blocks.extend_from_slice(bytes);
        self
    }

    pub fn block_count(&self) -> u32 {
        self.count
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with_count(self.count)
    }

    pub fn build_with_count(&self, count: u32) -> Vec<u8> {
        let mut out = header(self.major, self.minor, count);
        out.extend_from_slice(&self.blocks);
        out
    }
}
