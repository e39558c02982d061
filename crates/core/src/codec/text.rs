//! UTF-16BE block names.
//!
//! ```text
//! [2 bytes]        count of code units, including the null terminator
//! [(count-1) * 2]  UTF-16BE text
//! [2 bytes]        terminator (discarded)
//! ```

use byteorder::{BigEndian, ByteOrder};

use crate::error::Result;
use crate::parser::ByteCursor;

/// Read a length-prefixed name and advance past its terminator.
///
/// A count of 0 has no terminator and yields an empty name. Unpaired
/// surrogates decode to U+FFFD.
pub fn read_name(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let count = cursor.read_u16()? as usize;
    if count == 0 {
        return Ok(String::new());
    }

    let text = cursor.take((count - 1) * 2)?;
    cursor.skip(2)?;

    Ok(decode_utf16be(text))
}

/// Decode big-endian UTF-16 code units into a `String`.
pub fn decode_utf16be(bytes: &[u8]) -> String {
    let units = bytes.chunks_exact(2).map(BigEndian::read_u16);
    let mut name = String::with_capacity(bytes.len() / 2);
    name.extend(char::decode_utf16(units).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)));
    name
}
