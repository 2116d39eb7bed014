//! One-shot analysis of a board written in compact notation.

use tictactoe_engine::{Board, GameStatus, Mark, SearchReport, Searcher, is_full, winner};
use tracing::instrument;

/// Status of a board plus the engine's answer for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Classification of the board.
    pub status: GameStatus,
    /// Side to move, inferred from piece counts (X moves first).
    pub to_move: Mark,
    /// Engine choice, present only while the game is in progress.
    pub best: Option<SearchReport>,
}

/// Classifies `board` and, if the game is still running, searches it.
///
/// A parsed board has no record of the last mover, so both marks are
/// checked for a completed line.
#[instrument(skip(searcher))]
pub fn analyze(board: &Board, searcher: &Searcher) -> anyhow::Result<Analysis> {
    let x_count = count(board, Mark::X);
    let o_count = count(board, Mark::O);
    let to_move = if x_count > o_count { Mark::O } else { Mark::X };

    let status = match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    };

    let best = if status == GameStatus::InProgress {
        let mut scratch = *board;
        Some(searcher.search_as(&mut scratch, to_move)?)
    } else {
        None
    };

    Ok(Analysis {
        status,
        to_move,
        best,
    })
}

fn count(board: &Board, mark: Mark) -> usize {
    board
        .squares()
        .iter()
        .filter(|s| **s == tictactoe_engine::Square::Occupied(mark))
        .count()
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            GameStatus::Won(mark) => write!(f, "{} has won", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress => {
                write!(f, "{} to move", self.to_move)?;
                if let Some(report) = &self.best {
                    write!(
                        f,
                        "; best move {} (square {}), score {}, {} positions searched",
                        report.position,
                        report.position.to_index() + 1,
                        report.score,
                        report.nodes
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Position, Score};

    #[test]
    fn test_o_to_move_takes_win_over_block() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        let analysis = analyze(&board, &Searcher::default()).unwrap();
        assert_eq!(analysis.to_move, Mark::O);
        let best = analysis.best.unwrap();
        assert_eq!(best.position, Position::MiddleRight);
        assert_eq!(best.score, Score::WIN_O);
    }

    #[test]
    fn test_finished_board_not_searched() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let analysis = analyze(&board, &Searcher::default()).unwrap();
        assert_eq!(analysis.status, GameStatus::Won(Mark::X));
        assert!(analysis.best.is_none());
        assert_eq!(analysis.to_string(), "X has won");
    }

    #[test]
    fn test_empty_board_x_to_move() {
        let analysis = analyze(&Board::new(), &Searcher::default()).unwrap();
        assert_eq!(analysis.to_move, Mark::X);
        assert_eq!(analysis.best.unwrap().score, Score::DRAW);
        assert!(analysis.to_string().starts_with("X to move; best move"));
    }
}
