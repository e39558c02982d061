//! asef - decoder for ASEF binary color swatch exchange files.
//!
//! Decodes the block stream into a [`Document`] of groups and colors and
//! optionally projects it to JSON or to a stylesheet variable mapping.

pub mod api;
pub mod codec;
pub mod converter;
pub mod error;
pub mod model;
pub mod parser;

pub use api::high_level;
pub use api::{DecodeOptions, OutputMode, Projection, decode, decode_document, decode_with_options};
pub use error::{AseError, FormatError, Result, StructuralError};
pub use model::{Color, ColorModel, ColorType, Document, Group, Version};
pub use parser::FramingPolicy;
