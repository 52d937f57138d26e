/// Graphic element records

use serde::{Deserialize, Serialize};

use super::attr::Dimension;

/// A rectangle with x, y, w and h (or hr for squares)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    #[serde(flatten)]
    pub dim: Dimension,
}

/// An ellipse with x, y, w and h (or hr for circles)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ellipse {
    #[serde(flatten)]
    pub dim: Dimension,
}

/// An elliptical arc between two angles.
///
/// The arc keeps its own `sp` and `opacity`; those, not the ones inside
/// `dim`, are what the arc markup carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arc {
    pub dim: Dimension,
    /// Begin angle in degrees
    pub a1: f64,
    /// End angle in degrees
    pub a2: f64,
    /// Stroke thickness
    pub sp: f64,
    pub opacity: f64,
}

/// A straight line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    pub xp1: f64,
    pub yp1: f64,
    pub xp2: f64,
    pub yp2: f64,
    /// Line thickness
    pub sp: f64,
    pub color: String,
    pub opacity: f64,
}

/// A quadratic Bezier curve from (xp1, yp1) to (xp3, yp3) with its control
/// point at (xp2, yp2)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Curve {
    pub xp1: f64,
    pub yp1: f64,
    pub xp2: f64,
    pub yp2: f64,
    pub xp3: f64,
    pub yp3: f64,
    pub sp: f64,
    pub color: String,
    pub opacity: f64,
}

/// A filled polygon. Coordinates are space-separated percentage strings as
/// produced by [`crate::coords::polycoord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polygon {
    pub xc: String,
    pub yc: String,
    pub color: String,
    pub opacity: f64,
}

/// An open polyline, encoded the same way as [`Polygon`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyline {
    pub xc: String,
    pub yc: String,
    /// Line thickness
    pub sp: f64,
    pub color: String,
    pub opacity: f64,
}
