/// Text, list and image records

use serde::{Deserialize, Serialize};

use super::attr::CommonAttr;

/// One line of a [`List`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub color: String,
    pub opacity: f64,
    pub font: String,
    /// Item content, already escaped as far as the caller needs
    pub text: String,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A plain, bullet or numbered list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    #[serde(flatten)]
    pub attr: CommonAttr,
    /// Wrap width
    pub wp: f64,
    #[serde(rename = "li")]
    pub items: Vec<ListItem>,
}

/// A text element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    #[serde(flatten)]
    pub attr: CommonAttr,
    /// Wrap width
    pub wp: f64,
    /// Source file reference; carried in the model, never emitted
    pub file: String,
    /// Literal text payload
    pub data: String,
}

/// An image placed at (xp, yp).
///
/// Width and height are device units, not percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(flatten)]
    pub attr: CommonAttr,
    pub width: i32,
    pub height: i32,
    /// Scale percentage
    pub scale: f64,
    /// Scale the image to the canvas
    pub autoscale: String,
    /// Image file name
    pub name: String,
    pub caption: String,
}
