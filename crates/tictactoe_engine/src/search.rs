//! Exhaustive minimax search.
//!
//! O is the maximizer and X the minimizer over a shared score. Every legal
//! continuation is expanded down to a terminal board; there is no pruning,
//! no memoization and no heuristic cut-off. The whole tree from an empty
//! board is under a million nodes.
//!
//! The search probes a single board buffer in place. Each speculative mark
//! is owned by a [`Probe`] guard that restores the square to empty when it
//! goes out of scope, so callers never observe a probed mark.

use crate::error::SearchError;
use crate::position::Position;
use crate::rules::{has_win, is_full};
use crate::types::{Board, Mark, Score};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// How terminal boards are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Scoring {
    /// A win is worth the same however many plies it takes.
    ///
    /// Among equally scored moves the first in scan order is kept, so a slow
    /// forced win can be chosen over an immediate one.
    #[default]
    Flat,
    /// A win `d` plies below the root is worth `10 - d`, so quicker wins and
    /// slower losses are preferred.
    DepthAware,
}

impl Scoring {
    fn win(self, mark: Mark, depth: i32) -> Score {
        match self {
            Scoring::Flat => Score::win_for(mark),
            Scoring::DepthAware => {
                let base = Score::win_for(mark).value();
                Score::from(base - base.signum() * depth)
            }
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move.
    pub position: Position,
    /// Guaranteed score of the chosen move under optimal replies.
    pub score: Score,
    /// Number of positions evaluated below the root.
    pub nodes: u64,
}

/// Minimax searcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    scoring: Scoring,
}

/// Speculative mark that is cleared on drop.
struct Probe<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        board.place(pos, mark);
        Self { board, pos }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// The side about to move: O when maximizing, X when minimizing.
fn side_to_move(maximizing: bool) -> Mark {
    if maximizing { Mark::O } else { Mark::X }
}

impl Searcher {
    /// Creates a searcher with the given scoring.
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    /// Scoring in use.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Best move for O (the maximizer).
    pub fn search(&self, board: &mut Board) -> Result<SearchReport, SearchError> {
        self.search_as(board, Mark::O)
    }

    /// Best move for `mover`: O maximizes the score, X minimizes it.
    ///
    /// Ties keep the first position in scan order. The board is unchanged
    /// when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the board has no empty square.
    #[instrument(skip(self, board), fields(scoring = %self.scoring, occupied = board.occupied_count()))]
    pub fn search_as(&self, board: &mut Board, mover: Mark) -> Result<SearchReport, SearchError> {
        let maximizing = mover == Mark::O;
        let mut nodes = 0;
        let mut best: Option<(Position, Score)> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let score = {
                let mut probe = Probe::place(board, pos, mover);
                self.evaluate_at(&mut probe, !maximizing, 1, &mut nodes)
            };
            trace!(position = %pos, %score, "Scored candidate");

            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((pos, score));
            }
        }

        let (position, score) = best.ok_or_else(SearchError::no_legal_moves)?;
        debug!(%position, %score, nodes, "Search complete");
        Ok(SearchReport {
            position,
            score,
            nodes,
        })
    }

    /// Minimax value of `board` with the side given by `maximizing` to move.
    ///
    /// The board must be the result of a move by the opposite side; that
    /// side is the only one checked for a completed line.
    pub fn evaluate(&self, board: &mut Board, maximizing: bool) -> Score {
        let mut nodes = 0;
        self.evaluate_at(board, maximizing, 0, &mut nodes)
    }

    fn evaluate_at(&self, board: &mut Board, maximizing: bool, depth: i32, nodes: &mut u64) -> Score {
        *nodes += 1;

        let last_mover = side_to_move(!maximizing);
        if has_win(board, last_mover) {
            return self.scoring.win(last_mover, depth);
        }
        if is_full(board) {
            return Score::DRAW;
        }

        let mover = side_to_move(maximizing);
        let mut best: Option<Score> = None;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let score = {
                let mut probe = Probe::place(board, pos, mover);
                self.evaluate_at(&mut probe, !maximizing, depth + 1, nodes)
            };
            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        // A board that is not full always has a child.
        best.unwrap_or(Score::DRAW)
    }
}

/// Best move for O using flat scoring. The board is unchanged on return.
///
/// # Errors
///
/// Returns [`SearchError`] if the board has no empty square.
pub fn best_move(board: &mut Board) -> Result<Position, SearchError> {
    Searcher::default().search(board).map(|report| report.position)
}

/// Chooses O's best move and places it.
///
/// # Errors
///
/// Returns [`SearchError`] if the board has no empty square.
pub fn play_best_move(board: &mut Board) -> Result<Position, SearchError> {
    let position = best_move(board)?;
    board.place(position, Mark::O);
    Ok(position)
}

/// Flat-scored minimax value of `board` with the side given by `maximizing`
/// to move.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    Searcher::default().evaluate(board, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_probe_restores_square_on_drop() {
        let mut b = Board::new();
        {
            let probe = Probe::place(&mut b, Position::Center, Mark::O);
            assert!(!probe.is_empty(Position::Center));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("OO./XX./...");
        assert_eq!(best_move(&mut b).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_blocks_imminent_loss() {
        // Blocking at 2 also forks (5 and 6), and ties keep the first
        // index, so the block is chosen over the immediate win at 5.
        let mut b = board("XX./OO./...");
        assert_eq!(best_move(&mut b).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut b = board("XOX/OXX/OXO");
        let err = best_move(&mut b).unwrap_err();
        assert!(err.to_string().contains("no empty square"));
    }

    #[test]
    fn test_evaluate_terminal_boards() {
        // X just completed a row; O would be next.
        assert_eq!(evaluate(&mut board("XXX/OO./..."), true), Score::WIN_X);
        // O just completed a column; X would be next.
        assert_eq!(evaluate(&mut board("OX./OX./O.X"), false), Score::WIN_O);
        assert_eq!(evaluate(&mut board("XOX/OXX/OXO"), true), Score::DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        assert_eq!(evaluate(&mut Board::new(), false), Score::DRAW);
    }

    #[test]
    fn test_search_as_x_minimizes() {
        let mut b = board("XX./OO./...");
        let report = Searcher::default().search_as(&mut b, Mark::X).unwrap();
        assert_eq!(report.position, Position::TopRight);
        assert_eq!(report.score, Score::WIN_X);
        assert_eq!(b, board("XX./OO./..."));
    }

    #[test]
    fn test_flat_scoring_keeps_first_forced_win() {
        // O at 1 forks (2 and 6); O at 6 wins at once. Both score +10.
        let mut b = board("O../OX./..X");
        let report = Searcher::default().search(&mut b).unwrap();
        assert_eq!(report.position, Position::TopCenter);
        assert_eq!(report.score, Score::WIN_O);
    }

    #[test]
    fn test_depth_aware_prefers_immediate_win() {
        let mut b = board("O../OX./..X");
        let report = Searcher::new(Scoring::DepthAware).search(&mut b).unwrap();
        assert_eq!(report.position, Position::BottomLeft);
        assert_eq!(report.score, Score::from(9));
        assert_eq!(b, board("O../OX./..X"));
    }

    #[test]
    fn test_searcher_reports_its_scoring() {
        assert_eq!(Searcher::default().scoring(), Scoring::Flat);
        assert_eq!(Searcher::new(Scoring::DepthAware).scoring(), Scoring::DepthAware);
    }

    #[test]
    fn test_play_best_move_places_single_mark() {
        let before = board("XX./OO./...");
        let mut b = before;
        let pos = play_best_move(&mut b).unwrap();
        assert_eq!(pos, Position::TopRight);
        for other in Position::ALL {
            if other == pos {
                assert_eq!(b.get(other), crate::Square::Occupied(Mark::O));
            } else {
                assert_eq!(b.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn test_node_count_from_empty_board() {
        let report = Searcher::default().search(&mut Board::new()).unwrap();
        assert!(report.nodes > 500_000);
        assert!(report.nodes < 600_000);
    }
}
