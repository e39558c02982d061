//! Output projections of a decoded document.
//!
//! - `json`: the full document as JSON text
//! - `stylesheet`: RGB colors as a name → `rgb(...)` mapping

pub mod json;
pub mod stylesheet;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::model::Document;

pub use json::{to_json, to_json_pretty, to_value};
pub use stylesheet::{stylesheet_entries, to_stylesheet};

/// Output selector for [`decode`](crate::api::decode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// The decoded [`Document`] itself.
    #[default]
    Raw,
    Json,
    Stylesheet,
}

impl OutputMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputMode::Raw => "raw",
            OutputMode::Json => "json",
            OutputMode::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output mode: {0:?}")]
pub struct ParseOutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "raw" => Ok(OutputMode::Raw),
            "json" => Ok(OutputMode::Json),
            // "stylus" is the historical name of this output
            "stylesheet" | "stylus" => Ok(OutputMode::Stylesheet),
            _ => Err(ParseOutputModeError(s.to_string())),
        }
    }
}

/// Value returned by [`decode`](crate::api::decode).
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Document(Document),
    Json(String),
    Stylesheet(String),
}

impl Projection {
    /// Text of a JSON or stylesheet projection.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Projection::Document(_) => None,
            Projection::Json(text) | Projection::Stylesheet(text) => Some(text.as_str()),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Projection::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn into_document(self) -> Option<Document> {
        match self {
            Projection::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            Projection::Document(_) => OutputMode::Raw,
            Projection::Json(_) => OutputMode::Json,
            Projection::Stylesheet(_) => OutputMode::Stylesheet,
        }
    }
}

/// Apply `mode` to a decoded document.
pub fn project(doc: Document, mode: OutputMode) -> Result<Projection> {
    Ok(match mode {
        OutputMode::Raw => Projection::Document(doc),
        OutputMode::Json => Projection::Json(to_json(&doc)?),
        OutputMode::Stylesheet => Projection::Stylesheet(to_stylesheet(&doc)?),
    })
}
