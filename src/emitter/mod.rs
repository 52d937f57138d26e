//! Deck markup emitter
//!
//! An [`Emitter`] is bound to one output sink and one canvas for its whole
//! life. Callers bracket output with deck and slide calls and emit elements
//! in between, in the order they should appear:
//!
//! ```
//! use deckgen::Emitter;
//!
//! # fn main() -> deckgen::Result<()> {
//! let mut out = Vec::new();
//! let mut deck = Emitter::new(&mut out, 800, 600);
//! deck.start_deck()?;
//! deck.start_slide(&["black", "white"])?;
//! deck.text(10.0, 20.0, "Hi", "sans", 3.0, "white", None)?;
//! deck.end_slide()?;
//! deck.end_deck()?;
//! assert!(String::from_utf8(out).unwrap().ends_with("</slide>\n</deck>\n"));
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is buffered across calls: each operation formats its markup and
//! hands it to the sink in a single write. The sink is never flushed or
//! closed by the emitter.

mod convenience;
pub mod lifecycle;
mod markup;

pub use lifecycle::Lifecycle;
pub use markup::TextTemplate;

use std::io::Write;

use log::{debug, warn};

use crate::{Canvas, Result};

/// Opacity used by the convenience operations when none is given
pub const DEFAULT_OPACITY: f64 = 100.0;

/// Writes deck markup to a sink.
///
/// Pass `&mut W` to keep ownership of the sink with the caller.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    dest: W,
    canvas: Canvas,
    state: Lifecycle,
}

impl<W: Write> Emitter<W> {
    /// Bind an emitter to `dest` with a `width` x `height` canvas.
    ///
    /// No validation is done; zero or negative sizes are written as given.
    pub fn new(dest: W, width: i32, height: i32) -> Self {
        Self::with_canvas(dest, Canvas { width, height })
    }

    pub fn with_canvas(dest: W, canvas: Canvas) -> Self {
        Self {
            dest,
            canvas,
            state: Lifecycle::Idle,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Where the caller currently is in the deck/slide nesting
    pub fn lifecycle(&self) -> Lifecycle {
        self.state
    }

    pub fn get_ref(&self) -> &W {
        &self.dest
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.dest
    }

    /// Give the sink back to the caller
    pub fn into_inner(self) -> W {
        self.dest
    }

    /// Begin the deck: `<deck><canvas width="W" height="H"/>`
    pub fn start_deck(&mut self) -> Result<()> {
        self.state.start_deck();
        debug!("start deck {}x{}", self.canvas.width, self.canvas.height);
        let line = format!(
            "<deck><canvas width=\"{}\" height=\"{}\"/>\n",
            self.canvas.width, self.canvas.height
        );
        self.write_markup(&line)
    }

    /// End the deck
    pub fn end_deck(&mut self) -> Result<()> {
        self.state.end_deck();
        debug!("end deck");
        self.write_markup("</deck>\n")
    }

    /// Begin a slide.
    ///
    /// No colors gives the bare tag, one sets the background, two set the
    /// background and foreground. Any other count falls back to the bare
    /// tag.
    pub fn start_slide(&mut self, colors: &[&str]) -> Result<()> {
        self.state.start_slide();
        let line = match colors {
            [bg] => format!("<slide bg=\"{}\">\n", bg),
            [bg, fg] => format!("<slide bg=\"{}\" fg=\"{}\">\n", bg, fg),
            [] => "<slide>\n".to_string(),
            _ => {
                warn!(
                    "start_slide: {} colors given, writing a bare slide tag",
                    colors.len()
                );
                "<slide>\n".to_string()
            }
        };
        debug!("start slide {:?}", colors);
        self.write_markup(&line)
    }

    /// End a slide
    pub fn end_slide(&mut self) -> Result<()> {
        self.state.end_slide();
        debug!("end slide");
        self.write_markup("</slide>\n")
    }

    fn write_markup(&mut self, markup: &str) -> Result<()> {
        self.dest.write_all(markup.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Emitter<&mut Vec<u8>>) -> Result<()>,
    {
        let mut out = Vec::new();
        let mut e = Emitter::new(&mut out, 960, 720);
        f(&mut e).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn deck_brackets() {
        let s = emit(|e| {
            e.start_deck()?;
            e.end_deck()
        });
        assert_eq!(s, "<deck><canvas width=\"960\" height=\"720\"/>\n</deck>\n");
    }

    #[test]
    fn canvas_passes_through_unvalidated() {
        let mut out = Vec::new();
        let mut e = Emitter::new(&mut out, 0, -5);
        e.start_deck().unwrap();
        assert_eq!(e.canvas(), Canvas { width: 0, height: -5 });
        drop(e);
        assert_eq!(out, b"<deck><canvas width=\"0\" height=\"-5\"/>\n");
    }

    #[test]
    fn slide_color_counts() {
        assert_eq!(emit(|e| e.start_slide(&[])), "<slide>\n");
        assert_eq!(emit(|e| e.start_slide(&["black"])), "<slide bg=\"black\">\n");
        assert_eq!(
            emit(|e| e.start_slide(&["black", "white"])),
            "<slide bg=\"black\" fg=\"white\">\n"
        );
        assert_eq!(emit(|e| e.start_slide(&["a", "b", "c"])), "<slide>\n");
        assert_eq!(emit(|e| e.end_slide()), "</slide>\n");
    }

    #[test]
    fn tracks_lifecycle() {
        let mut out = Vec::new();
        let mut e = Emitter::with_canvas(&mut out, Canvas::default());
        assert_eq!(e.lifecycle(), Lifecycle::Idle);
        e.start_deck().unwrap();
        e.start_slide(&[]).unwrap();
        assert_eq!(e.lifecycle(), Lifecycle::SlideOpen);
        e.end_slide().unwrap();
        e.end_deck().unwrap();
        assert_eq!(e.lifecycle(), Lifecycle::DeckClosed);
    }

    #[test]
    fn into_inner_returns_sink() {
        let mut e = Emitter::new(Vec::new(), 1, 1);
        e.end_deck().unwrap();
        assert_eq!(e.get_ref().len(), 8);
        assert_eq!(e.into_inner(), b"</deck>\n");
    }
}
