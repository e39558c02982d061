//! High-level decoding API.
//!
//! - `decode()` - decode a buffer and apply an output projection
//! - `decode_with_options()` - same, with explicit decoder options
//! - `decode_document()` - decode a buffer into a [`Document`]

use tracing::{debug, warn};

use crate::converter::{OutputMode, Projection, project};
use crate::error::{Result, StructuralError};
use crate::model::Document;
use crate::parser::{FramingPolicy, decode_blocks, parse_header};

/// Options for block stream decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How block length fields delimit blocks.
    pub framing: FramingPolicy,

    /// Fail when the header's block count differs from the number of
    /// blocks decoded. When false the mismatch is only logged.
    pub check_block_count: bool,
}

impl DecodeOptions {
    /// Options reproducing the historical decoder: lengths ignored,
    /// block count unchecked.
    pub fn implicit() -> Self {
        Self {
            framing: FramingPolicy::Implicit,
            check_block_count: false,
        }
    }
}

/// Decode an ASEF buffer and project it.
///
/// # Arguments
/// * `buffer` - File contents; anything viewable as bytes (including text)
/// * `mode` - Output projection (None for [`OutputMode::Raw`])
///
/// # Example
/// ```ignore
/// use asef_core::api::{decode, OutputMode};
///
/// let bytes = std::fs::read("palette.ase")?;
/// let css = decode(&bytes, Some(OutputMode::Stylesheet))?;
/// println!("{}", css.as_text().unwrap_or_default());
/// ```
pub fn decode(buffer: impl AsRef<[u8]>, mode: Option<OutputMode>) -> Result<Projection> {
    decode_with_options(buffer, mode, None)
}

/// Decode and project with explicit options (None for defaults).
pub fn decode_with_options(
    buffer: impl AsRef<[u8]>,
    mode: Option<OutputMode>,
    options: Option<DecodeOptions>,
) -> Result<Projection> {
    let doc = decode_document(buffer, options)?;
    project(doc, mode.unwrap_or_default())
}

/// Decode a buffer into a [`Document`].
///
/// All-or-nothing: any error discards everything decoded so far.
pub fn decode_document(
    buffer: impl AsRef<[u8]>,
    options: Option<DecodeOptions>,
) -> Result<Document> {
    let options = options.unwrap_or_default();
    let data = buffer.as_ref();

    let (header, cursor) = parse_header(data)?;
    let stream = decode_blocks(cursor, header.version, options.framing)?;

    if stream.blocks != header.block_count {
        if options.check_block_count {
            return Err(StructuralError::BlockCountMismatch {
                declared: header.block_count,
                found: stream.blocks,
            }
            .into());
        }
        warn!(
            declared = header.block_count,
            found = stream.blocks,
            "block count does not match header"
        );
    }

    let doc = stream.document;
    debug!(
        version = %doc.version,
        groups = doc.groups.len(),
        colors = doc.colors.len(),
        "decoded swatch document"
    );
    Ok(doc)
}
