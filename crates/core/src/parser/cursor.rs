//! Bounded big-endian cursor over an in-memory buffer.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Result, StructuralError};

/// Read position into a borrowed byte buffer.
///
/// Every read is bounds-checked and fails with
/// [`StructuralError::UnexpectedEof`] instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Cursor positioned at `pos` (clamped to the buffer length).
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(StructuralError::UnexpectedEof {
                pos: self.pos,
                needed: n,
                available: self.remaining(),
            }
            .into());
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Advance without reading.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.take(2).map(BigEndian::read_u16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.take(4).map(BigEndian::read_u32)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.take(4).map(BigEndian::read_f32)
    }

    /// Fixed-width tag, copied out so it outlives further reads.
    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        let bytes = self.take(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
