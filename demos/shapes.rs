//! Shapes example - writes a two-slide deck to stdout
//!
//! Run with `RUST_LOG=trace cargo run --example shapes` to see each element
//! as it is emitted.

use std::io::{self, BufWriter, Write};

use deckgen::Emitter;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut deck = Emitter::new(&mut out, 1024, 768);

    deck.start_deck()?;

    deck.start_slide(&["rgb(240,240,240)", "black"])?;
    deck.text_mid(50.0, 90.0, "Shapes", "sans", 5.0, "black", None)?;
    let colors = ["red", "orange", "green", "blue", "purple"];
    for (i, color) in colors.iter().enumerate() {
        let x = 15.0 + i as f64 * 17.5;
        deck.circle(x, 60.0, 10.0, color, None)?;
        deck.square(x, 35.0, 10.0, color, Some(40.0))?;
    }
    deck.end_slide()?;

    deck.start_slide(&["black", "white"])?;
    deck.line(10.0, 20.0, 90.0, 20.0, 0.3, "white", None)?;
    deck.curve(10.0, 40.0, 50.0, 80.0, 90.0, 40.0, 0.5, "yellow", None)?;
    deck.arc(50.0, 40.0, 20.0, 20.0, 0.5, 0.0, 180.0, "cyan", Some(70.0))?;
    deck.polygon(&[40.0, 50.0, 60.0], &[60.0, 75.0, 60.0], "gray", None)?;
    deck.end_slide()?;

    deck.end_deck()?;
    out.flush()?;
    Ok(())
}
