//! Decoded swatch document: version, groups and the flat color list.

use std::fmt;

use serde::{Serialize, Serializer};

use super::color::Color;

/// Two-part format version from the file header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A named collection of colors delimited by group start/end blocks.
///
/// Colors are owned by [`Document::colors`]; a group only records the
/// positions of its members there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub name: String,
    members: Vec<usize>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Indices into [`Document::colors`], in stream order.
    pub fn color_indices(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn push_member(&mut self, index: usize) {
        self.members.push(index);
    }
}

/// Root value produced by decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub version: Version,
    pub groups: Vec<Group>,
    /// Every color in the stream, grouped or not.
    pub colors: Vec<Color>,
}

impl Document {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            groups: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Colors belonging to `group`, resolved against this document.
    pub fn group_colors<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Color> + 'a {
        group
            .color_indices()
            .iter()
            .filter_map(move |&i| self.colors.get(i))
    }

    /// Find a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Colors that are not a member of any group.
    pub fn ungrouped_colors(&self) -> impl Iterator<Item = &Color> {
        let mut grouped = vec![false; self.colors.len()];
        for group in &self.groups {
            for &i in group.color_indices() {
                if let Some(slot) = grouped.get_mut(i) {
                    *slot = true;
                }
            }
        }
        self.colors
            .iter()
            .zip(grouped)
            .filter(|(_, in_group)| !in_group)
            .map(|(color, _)| color)
    }
}
