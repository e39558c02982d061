//! JSON projection of a decoded document.
//!
//! Groups are written with their full color objects, so grouped colors
//! appear twice in the output: under their group and in `colors`.

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::model::{Color, Document, Group, Version};

#[derive(Serialize)]
struct GroupView<'a> {
    name: &'a str,
    colors: Vec<&'a Color>,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    version: Version,
    groups: Vec<GroupView<'a>>,
    colors: &'a [Color],
}

impl<'a> GroupView<'a> {
    fn new(doc: &'a Document, group: &'a Group) -> Self {
        Self {
            name: &group.name,
            colors: doc.group_colors(group).collect(),
        }
    }
}

impl<'a> From<&'a Document> for DocumentView<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            version: doc.version,
            groups: doc.groups.iter().map(|g| GroupView::new(doc, g)).collect(),
            colors: &doc.colors,
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DocumentView::from(self).serialize(serializer)
    }
}

/// Compact JSON text.
pub fn to_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string(doc)?)
}

/// Indented JSON text.
pub fn to_json_pretty(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Structured JSON value.
pub fn to_value(doc: &Document) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(doc)?)
}
