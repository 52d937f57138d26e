//! Deck data model
//!
//! Plain records describing a deck, its slides and every drawable element.
//! The types carry no behavior: callers build them (or let the emitter's
//! convenience operations build them) and hand them to the emitter, which
//! serializes and forgets them.
//!
//! Field names follow the markup vocabulary, and the serde names match the
//! markup attribute names so a JSON description of a record reads the same
//! way the emitted tag does.

pub mod attr;
pub mod content;
pub mod shapes;

pub use attr::{CommonAttr, Dimension};
pub use content::{Image, List, ListItem, Text};
pub use shapes::{Arc, Curve, Ellipse, Line, Polygon, Polyline, Rect};

use serde::{Deserialize, Serialize};

/// Canvas size in device units.
///
/// Every percentage coordinate is relative to this size. The emitter fixes
/// it at construction, so it cannot change once the deck is open.
///
/// # Examples
///
/// ```
/// let c = deckgen::Canvas::default();
/// assert_eq!((c.width, c.height), (792, 612));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 792,
            height: 612,
        }
    }
}

/// A presentation: metadata, canvas and the ordered slides.
///
/// The metadata fields are informational only; the markup emitter writes
/// just the canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deck {
    pub title: String,
    pub creator: String,
    pub subject: String,
    pub publisher: String,
    pub description: String,
    pub date: String,
    pub canvas: Canvas,
    #[serde(rename = "slide")]
    pub slides: Vec<Slide>,
}

/// One frame of the presentation.
///
/// Either `bg` or the two gradient colors style the slide; nothing enforces
/// that only one is set. The element sequences describe z-order per kind,
/// but the emitter does not walk a `Slide`: callers emit elements in the
/// interleaving they want.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    pub bg: String,
    pub fg: String,
    pub gradcolor1: String,
    pub gradcolor2: String,
    #[serde(rename = "gp")]
    pub grad_percent: f64,
    /// Display duration, e.g. "2s"
    pub duration: String,
    /// Speaker note
    pub note: String,
    #[serde(rename = "list")]
    pub lists: Vec<List>,
    #[serde(rename = "text")]
    pub texts: Vec<Text>,
    #[serde(rename = "image")]
    pub images: Vec<Image>,
    #[serde(rename = "ellipse")]
    pub ellipses: Vec<Ellipse>,
    #[serde(rename = "line")]
    pub lines: Vec<Line>,
    #[serde(rename = "rect")]
    pub rects: Vec<Rect>,
    #[serde(rename = "curve")]
    pub curves: Vec<Curve>,
    #[serde(rename = "arc")]
    pub arcs: Vec<Arc>,
    #[serde(rename = "polygon")]
    pub polygons: Vec<Polygon>,
    #[serde(rename = "polyline")]
    pub polylines: Vec<Polyline>,
}
