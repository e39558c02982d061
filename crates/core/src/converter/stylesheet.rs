//! Stylesheet variable projection.
//!
//! Walks the flat color list and maps each RGB color to an
//! `rgb(R,G,B)` string, with channels scaled by 255. Unnamed colors are
//! called `color1`, `color2`, ... in order; named colors do not use up a
//! number. Non-RGB colors are left out.

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::{Color, ColorModel, Document};

/// Name → `rgb(...)` pairs, in first-insertion order.
///
/// A repeated name overwrites the earlier value but keeps its position.
pub fn stylesheet_entries(doc: &Document) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    let mut unnamed = 0usize;

    for color in &doc.colors {
        let name = if color.is_named() {
            color.name.clone()
        } else {
            unnamed += 1;
            format!("color{unnamed}")
        };

        if color.model == ColorModel::Rgb {
            entries.insert(name, rgb_function(color));
        }
    }

    entries
}

/// The mapping serialized as a JSON object.
pub fn to_stylesheet(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string(&stylesheet_entries(doc))?)
}

fn rgb_function(color: &Color) -> String {
    let [r, g, b] = [0, 1, 2].map(|i| scale(color.channels.get(i).copied().unwrap_or(0.0)));
    format!("rgb({r},{g},{b})")
}

/// Scale a unit channel to 0..255 without rounding or clamping.
fn scale(channel: f32) -> f64 {
    // Adding 0.0 folds -0.0 into 0.0.
    f64::from(channel) * 255.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::scale;

    #[test]
    fn test_scale_formats_like_integers() {
        assert_eq!(format!("{}", scale(1.0)), "255");
        assert_eq!(format!("{}", scale(0.5)), "127.5");
        assert_eq!(format!("{}", scale(-0.0)), "0");
        assert_eq!(format!("{}", scale(2.0)), "510");
    }
}
