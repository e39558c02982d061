//! Field codecs shared by the block decoder.
//!
//! - `model`: color model tags, channel values and color types
//! - `text`: UTF-16BE names

pub mod model;
pub mod text;

pub use model::{parse_model, read_channels, read_model, read_type, resolve_type};
pub use text::{decode_utf16be, read_name};
