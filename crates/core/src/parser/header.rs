//! ASEF container header.
//!
//! ```text
//! [4 bytes] "ASEF"
//! [2 bytes] major version (big-endian u16)
//! [2 bytes] minor version (big-endian u16)
//! [4 bytes] block count (big-endian u32, informational)
//! ```

use tracing::debug;

use super::cursor::ByteCursor;
use crate::error::{FormatError, Result};
use crate::model::Version;

/// File signature.
pub const MAGIC: &[u8; 4] = b"ASEF";

/// Size of the fixed header; the first block starts here.
pub const HEADER_LEN: usize = 12;

/// Validated container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    /// Declared number of blocks. Not used to bound decoding.
    pub block_count: u32,
}

/// Validate the header and return a cursor at the first block.
pub fn parse_header(data: &[u8]) -> Result<(Header, ByteCursor<'_>)> {
    if !data.starts_with(MAGIC) {
        return Err(FormatError::BadMagic.into());
    }
    if data.len() < HEADER_LEN {
        return Err(FormatError::TruncatedHeader(data.len()).into());
    }

    let mut cursor = ByteCursor::at(data, MAGIC.len());
    let major = cursor.read_u16()?;
    let minor = cursor.read_u16()?;
    let block_count = cursor.read_u32()?;

    let header = Header {
        version: Version::new(major, minor),
        block_count,
    };
    debug!(
        version = %header.version,
        block_count,
        len = data.len(),
        "parsed ASE header"
    );

    Ok((header, cursor))
}
