//! Game status classification.

use super::{has_win, is_full};
use crate::types::{Board, GameStatus, Mark};
use tracing::instrument;

/// Classifies the board after `last_mover` has placed a mark.
///
/// Only `last_mover` is checked for a line, since a move cannot complete a
/// line for the opponent. Turn legality is not validated.
#[instrument(skip(board))]
pub fn status(board: &Board, last_mover: Mark) -> GameStatus {
    if has_win(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
