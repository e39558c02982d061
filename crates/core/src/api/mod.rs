//! High-level API module for swatch decoding.
//!
//! # Example
//!
//! ```ignore
//! use asef_core::api::{decode, OutputMode};
//!
//! let bytes = std::fs::read("palette.ase")?;
//! let json = decode(&bytes, Some(OutputMode::Json))?;
//! ```

pub mod high_level;

// Re-export for convenience
pub use crate::converter::{OutputMode, Projection};
pub use high_level::{DecodeOptions, decode, decode_document, decode_with_options};
