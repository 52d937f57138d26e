//! Outline example - drives the emitter from a deck description
//!
//! The emitter never walks a `Deck` itself; callers pick the order. This
//! example reads a small deck from JSON and emits each slide's lists, then
//! its text, then its rectangles.

use std::io;

use deckgen::{Deck, Emitter, TextTemplate};

const DECK: &str = r#"{
  "title": "Outline",
  "canvas": {"width": 960, "height": 720},
  "slide": [
    {
      "bg": "white",
      "fg": "black",
      "text": [{"xp": 10, "yp": 90, "sp": 4, "font": "sans", "opacity": 100, "color": "black", "data": "Agenda"}],
      "list": [{"type": "bullet", "xp": 10, "yp": 75, "sp": 2.5, "lp": 1.5, "font": "sans", "color": "black",
                "li": [{"text": "Canvas"}, {"text": "Slides"}, {"text": "Elements"}]}],
      "rect": [{"xp": 50, "yp": 10, "wp": 100, "hp": 2, "opacity": 100, "color": "steelblue"}]
    },
    {
      "bg": "black",
      "text": [{"xp": 50, "yp": 50, "sp": 6, "align": "center", "font": "serif", "opacity": 100, "color": "white", "data": "Thanks"}]
    }
  ]
}"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let deck: Deck = serde_json::from_str(DECK)?;
    let stdout = io::stdout();
    let mut e = Emitter::with_canvas(stdout.lock(), deck.canvas);

    e.start_deck()?;
    for slide in &deck.slides {
        match (slide.bg.as_str(), slide.fg.as_str()) {
            ("", _) => e.start_slide(&[])?,
            (bg, "") => e.start_slide(&[bg])?,
            (bg, fg) => e.start_slide(&[bg, fg])?,
        }
        for l in &slide.lists {
            e.emit_list(l)?;
        }
        for t in &slide.texts {
            e.emit_text(t, TextTemplate::Plain)?;
        }
        for r in &slide.rects {
            e.emit_rect(r)?;
        }
        e.end_slide()?;
    }
    e.end_deck()?;
    Ok(())
}
