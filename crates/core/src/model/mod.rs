//! Swatch data model.
//!
//! - `color` - Color entries, color models and usage types
//! - `document` - Document, groups and format version

pub mod color;
pub mod document;

pub use color::{Channels, Color, ColorModel, ColorType};
pub use document::{Document, Group, Version};
