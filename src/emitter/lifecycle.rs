//! Deck/slide nesting tracker.
//!
//! The emitter never refuses a call: this only records where the caller is
//! in the deck so misuse shows up as a log warning while tests run.

use log::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, deck not yet opened
    #[default]
    Idle,
    DeckOpen,
    SlideOpen,
    DeckClosed,
}

impl Lifecycle {
    pub(crate) fn start_deck(&mut self) {
        if *self != Lifecycle::Idle {
            warn!("deck opened while {:?}", self);
        }
        *self = Lifecycle::DeckOpen;
    }

    pub(crate) fn end_deck(&mut self) {
        if *self != Lifecycle::DeckOpen {
            warn!("deck closed while {:?}", self);
        }
        *self = Lifecycle::DeckClosed;
    }

    pub(crate) fn start_slide(&mut self) {
        if *self != Lifecycle::DeckOpen {
            warn!("slide opened while {:?}", self);
        }
        *self = Lifecycle::SlideOpen;
    }

    pub(crate) fn end_slide(&mut self) {
        if *self != Lifecycle::SlideOpen {
            warn!("slide closed while {:?}", self);
        }
        *self = Lifecycle::DeckOpen;
    }

    /// Elements belong inside a slide.
    pub(crate) fn element(&self, kind: &str) {
        if *self != Lifecycle::SlideOpen {
            warn!("{} emitted outside a slide ({:?})", kind, self);
        }
    }
}
