//! Error types for the engine.

use derive_more::{Display, Error};

/// Search was asked for a move on a board with no empty square.
///
/// This is a caller contract violation: game flow must check
/// [`crate::is_full`] (or [`crate::status`]) before asking for a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Search error: {} at {}:{}", message, file, line)]
pub struct SearchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The board handed to the search has no legal moves.
    #[track_caller]
    pub fn no_legal_moves() -> Self {
        Self::new("board has no empty square to move to")
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
