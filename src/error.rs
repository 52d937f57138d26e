//! Error types for the deck emitter

use thiserror::Error;

/// Result type alias for emitter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while emitting deck markup
///
/// The emitter validates nothing about coordinates, colors or nesting, so
/// the only failures are the ones the output sink reports.
#[derive(Error, Debug)]
pub enum Error {
    /// The sink rejected or failed a write
    #[error("Failed to write markup: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting a markup line failed
    #[error("Failed to format markup: {0}")]
    Format(#[from] std::fmt::Error),
}
