//! Outcome evaluation for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here validates turn order
//! or piece counts; callers ask about the mark that has just moved.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::status;
pub use win::{LINES, has_win, winner};
