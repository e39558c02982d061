//! Color model codec: model tags, channel values and usage types.

use crate::error::{Result, StructuralError};
use crate::model::{Channels, ColorModel, ColorType};
use crate::parser::ByteCursor;

/// Resolve a raw 4-byte model tag (e.g. `b"RGB "`).
///
/// Bytes are taken as Latin-1, space/NUL padding is trimmed and the
/// result uppercased before lookup.
pub fn parse_model(raw: [u8; 4]) -> Result<ColorModel> {
    let tag: String = raw.iter().map(|&b| b as char).collect();
    let trimmed = tag.trim_matches(|c: char| c == ' ' || c == '\0');

    ColorModel::from_tag(&trimmed.to_ascii_uppercase())
        .ok_or_else(|| StructuralError::UnsupportedColorModel(trimmed.to_string()).into())
}

/// Read the model tag at the cursor.
pub fn read_model(cursor: &mut ByteCursor<'_>) -> Result<ColorModel> {
    parse_model(cursor.read_tag()?)
}

/// Read `model.arity()` big-endian f32 channel values, in stored order.
pub fn read_channels(cursor: &mut ByteCursor<'_>, model: ColorModel) -> Result<Channels> {
    let mut channels = Channels::new();
    for _ in 0..model.arity() {
        channels.push(cursor.read_f32()?);
    }
    Ok(channels)
}

/// Map a color type code to its usage type.
pub fn resolve_type(code: u16) -> Result<ColorType> {
    ColorType::from_code(code).ok_or_else(|| StructuralError::UnknownColorType(code).into())
}

/// Read the 2-byte color type code at the cursor.
pub fn read_type(cursor: &mut ByteCursor<'_>) -> Result<ColorType> {
    resolve_type(cursor.read_u16()?)
}
