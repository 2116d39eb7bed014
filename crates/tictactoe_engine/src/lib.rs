//! Tic-tac-toe outcome evaluation and perfect-play search.
//!
//! The crate is pure: every function is a function of the board it is
//! handed, plus whose turn it is. Game flow (turn tracking, input, display)
//! belongs to the caller, which asks two questions:
//!
//! - [`status`] after each move, to decide whether the game is over;
//! - [`best_move`] on the computer's turn, while the game is in progress.
//!
//! ```
//! use tictactoe_engine::{Board, GameStatus, Mark, Position, best_move, status};
//!
//! let mut board: Board = "XX./OO./...".parse()?;
//! assert_eq!(status(&board, Mark::X), GameStatus::InProgress);
//!
//! let pos = best_move(&mut board)?;
//! assert_eq!(pos, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod error;
mod position;
mod rules;
mod search;
mod types;

pub use error::{BoardParseError, SearchError};
pub use position::Position;
pub use rules::{LINES, has_win, is_full, status, winner};
pub use search::{Scoring, SearchReport, Searcher, best_move, evaluate, play_best_move};
pub use types::{Board, GameStatus, Mark, Score, Square};
