//! Error types for the ASEF swatch decoder.

use thiserror::Error;

/// The container itself is not an ASEF file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a valid ASE file: missing \"ASEF\" signature")]
    BadMagic,

    #[error("ASE header truncated: need 12 bytes, got {0}")]
    TruncatedHeader(usize),
}

/// The block stream does not follow the block grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("unknown block type {tag:#06x} at byte #{pos}")]
    UnknownBlockTag { tag: u16, pos: usize },

    /// Internal-consistency fault: the stream ended while a block was open.
    #[error("unexpected decoder state {state} at byte #{pos}")]
    InvalidState { state: &'static str, pos: usize },

    #[error("unsupported color model: {0:?}")]
    UnsupportedColorModel(String),

    #[error("unknown color type: {0}")]
    UnknownColorType(u16),

    #[error("block at byte #{pos} declares {declared} bytes but {consumed} were decoded")]
    LengthMismatch {
        pos: usize,
        declared: u32,
        consumed: usize,
    },

    #[error("unexpected end of input at byte #{pos}: need {needed} bytes, {available} available")]
    UnexpectedEof {
        pos: usize,
        needed: usize,
        available: usize,
    },

    #[error("header declares {declared} blocks but {found} were decoded")]
    BlockCountMismatch { declared: u32, found: u32 },
}

/// Primary error type for decoding and projection.
#[derive(Error, Debug)]
pub enum AseError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AseError {
    /// The structural fault behind this error, if any.
    pub fn structural(&self) -> Option<&StructuralError> {
        match self {
            AseError::Structural(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience Result type alias for AseError.
pub type Result<T> = std::result::Result<T, AseError>;
