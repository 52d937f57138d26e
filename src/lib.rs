//! Deck markup emitter
//!
//! Turns typed slide-deck content into deck markup: one element per line,
//! positions and sizes as percentages of a fixed canvas.
//!
//! # Features
//!
//! - **Data model**: plain records for decks, slides and the eleven element
//!   kinds ([`model`])
//! - **Canonical serializers**: one `emit_*` method per kind, the single
//!   source of truth for tag names, attribute order and number formatting
//! - **Convenience operations**: build a record from positional arguments
//!   and emit it in one call, with opacity defaulting to 100
//!
//! The emitter is a formatting layer only. It does not validate ranges or
//! colors, does not escape text, and does not check that deck and slide
//! calls are nested correctly.
//!
//! # Example
//!
//! ```
//! use deckgen::Emitter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut out = Vec::new();
//! let mut deck = Emitter::new(&mut out, 960, 720);
//! deck.start_deck()?;
//! deck.start_slide(&["black"])?;
//! deck.circle(50.0, 50.0, 10.0, "red", None)?;
//! deck.polygon(&[10.0, 20.0, 15.0], &[10.0, 10.0, 20.0], "blue", Some(40.0))?;
//! deck.end_slide()?;
//! deck.end_deck()?;
//!
//! let markup = String::from_utf8(out)?;
//! assert!(markup.contains(r#"<ellipse xp="50.00" yp="50.00" wp="10.00" hr="100.00""#));
//! # Ok(())
//! # }
//! ```

pub mod coords;
pub mod emitter;
pub mod error;
pub mod model;

pub use coords::polycoord;
pub use emitter::{Emitter, Lifecycle, TextTemplate, DEFAULT_OPACITY};
pub use error::{Error, Result};
pub use model::{
    Arc, Canvas, CommonAttr, Curve, Deck, Dimension, Ellipse, Image, Line, List, ListItem,
    Polygon, Polyline, Rect, Slide, Text,
};
