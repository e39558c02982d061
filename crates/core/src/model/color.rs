//! Swatch color definitions.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Channel storage; no model has more than four channels.
pub type Channels = SmallVec<[f32; 4]>;

/// Color space a swatch's channel values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorModel {
    Cmyk,
    Rgb,
    Lab,
    Gray,
}

impl ColorModel {
    /// All models, in table order.
    pub const ALL: [ColorModel; 4] = [
        ColorModel::Cmyk,
        ColorModel::Rgb,
        ColorModel::Lab,
        ColorModel::Gray,
    ];

    /// Number of channels stored for this model.
    pub const fn arity(self) -> usize {
        match self {
            ColorModel::Cmyk => 4,
            ColorModel::Rgb => 3,
            ColorModel::Lab => 3,
            ColorModel::Gray => 1,
        }
    }

    /// Canonical tag as it appears (before padding) in the file.
    pub const fn tag(self) -> &'static str {
        match self {
            ColorModel::Cmyk => "CMYK",
            ColorModel::Rgb => "RGB",
            ColorModel::Lab => "LAB",
            ColorModel::Gray => "GRAY",
        }
    }

    /// Look up a model by its uppercase tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.tag() == tag)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Intended usage of a swatch, independent of its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Global,
    Spot,
    Normal,
}

impl ColorType {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(ColorType::Global),
            1 => Some(ColorType::Spot),
            2 => Some(ColorType::Normal),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorType::Global => "global",
            ColorType::Spot => "spot",
            ColorType::Normal => "normal",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named color entry.
///
/// `channels.len()` always equals `model.arity()`; the decoder never
/// builds a `Color` until every field has been read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub name: String,
    pub model: ColorModel,
    pub channels: Channels,
    #[serde(rename = "type")]
    pub color_type: ColorType,
}

impl Color {
    pub fn new(
        name: impl Into<String>,
        model: ColorModel,
        channels: &[f32],
        color_type: ColorType,
    ) -> Self {
        Self {
            name: name.into(),
            model,
            channels: SmallVec::from_slice(channels),
            color_type,
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
