//! ASEF container and block stream parsing.
//!
//! - `cursor`: bounded big-endian byte cursor
//! - `header`: signature, version and block count
//! - `blocks`: the block stream state machine

pub mod blocks;
pub mod cursor;
pub mod header;

pub use blocks::{BlockDecoder, BlockKind, DecodedStream, FramingPolicy, decode_blocks};
pub use cursor::ByteCursor;
pub use header::{HEADER_LEN, Header, MAGIC, parse_header};
