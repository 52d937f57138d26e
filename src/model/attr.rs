/// Attribute bundles shared by several element kinds

use serde::{Deserialize, Serialize};

/// Common attributes for text, list and image elements.
///
/// Coordinates and sizes are percentages of the canvas; every string is
/// copied into the markup verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonAttr {
    /// X coordinate
    pub xp: f64,
    /// Y coordinate
    pub yp: f64,
    /// Size
    pub sp: f64,
    /// Line spacing (leading) percentage
    pub lp: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Content type: block, plain, code, number, bullet
    #[serde(rename = "type")]
    pub kind: String,
    /// Alignment: center, right, or empty for the start
    pub align: String,
    pub color: String,
    pub gradcolor1: String,
    pub gradcolor2: String,
    /// Gradient percentage
    #[serde(rename = "gp")]
    pub grad_percent: f64,
    /// Opacity percentage
    pub opacity: f64,
    /// Font family, e.g. sans, serif, mono
    pub font: String,
    /// Reference to other content (http:// or mailto:)
    pub link: String,
}

/// A graphics object with a width and one of three height modes.
///
/// `hp` is an absolute height percentage, `hr` a relative height (with
/// `hr = 100` a single width gives an aspect-correct square or circle), and
/// `hw` is height by width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    #[serde(flatten)]
    pub attr: CommonAttr,
    /// Width percentage
    pub wp: f64,
    /// Height percentage
    pub hp: f64,
    /// Height relative percentage
    pub hr: f64,
    /// Height by width
    pub hw: f64,
}

impl Dimension {
    /// A dimension at (x, y) with width `w` and no height set yet.
    pub fn at(x: f64, y: f64, w: f64) -> Self {
        Self {
            attr: CommonAttr {
                xp: x,
                yp: y,
                ..Default::default()
            },
            wp: w,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_attr_uses_markup_attribute_names() {
        let a = CommonAttr {
            kind: "code".into(),
            grad_percent: 20.0,
            ..Default::default()
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["type"], "code");
        assert_eq!(v["gp"], 20.0);
    }

    #[test]
    fn dimension_flattens_common_attributes() {
        let d: Dimension =
            serde_json::from_str(r#"{"xp": 10, "yp": 20, "wp": 5, "hr": 100, "color": "red"}"#)
                .unwrap();
        assert_eq!(d.attr.xp, 10.0);
        assert_eq!(d.attr.color, "red");
        assert_eq!(d.hr, 100.0);
        assert_eq!(d.hp, 0.0);
    }
}
