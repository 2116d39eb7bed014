//! Tests for minimax move selection.

use std::collections::HashSet;
use tictactoe_engine::{
    Board, GameStatus, Mark, Position, Score, Searcher, Square, best_move, is_full,
    play_best_move, status,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Every non-terminal board reachable from an empty board where O is to move.
fn o_to_move_boards() -> Vec<Board> {
    fn walk(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if to_move == Mark::O && seen.insert(*board) {
            out.push(*board);
        }
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, to_move);
            if status(board, to_move) == GameStatus::InProgress {
                walk(board, to_move.opponent(), seen, out);
            }
            board.clear(pos);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::new(), Mark::X, &mut seen, &mut out);
    out
}

#[test]
fn test_completes_own_row() {
    let mut b = board("OO./XX./...");
    assert_eq!(best_move(&mut b).unwrap().to_index(), 2);
}

#[test]
fn test_blocks_opponent_row() {
    let mut b = board("XX./OO./...");
    assert_eq!(best_move(&mut b).unwrap().to_index(), 2);
}

#[test]
fn test_best_move_leaves_board_unchanged() {
    for before in o_to_move_boards().into_iter().step_by(37) {
        let mut b = before;
        best_move(&mut b).unwrap();
        assert_eq!(b, before);
    }
}

#[test]
fn test_best_move_always_targets_empty_square() {
    for mut b in o_to_move_boards() {
        let pos = best_move(&mut b).unwrap();
        assert!(b.is_empty(pos), "picked occupied {} on\n{}", pos, b);
    }
}

#[test]
fn test_play_best_move_adds_exactly_one_mark() {
    let before = board("X../.O./..X");
    let mut b = before;
    let pos = play_best_move(&mut b).unwrap();
    assert_eq!(b.get(pos), Square::Occupied(Mark::O));
    let changed: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|p| b.get(*p) != before.get(*p))
        .collect();
    assert_eq!(changed, vec![pos]);
}

#[test]
fn test_full_board_rejected() {
    let mut b = board("XOX/OXX/OXO");
    assert!(is_full(&b));
    assert!(best_move(&mut b).is_err());
    assert_eq!(b, board("XOX/OXX/OXO"));
}

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let searcher = Searcher::default();
    let mut b = Board::new();
    let mut to_move = Mark::X;
    loop {
        let report = searcher.search_as(&mut b, to_move).unwrap();
        b.place(report.position, to_move);
        match status(&b, to_move) {
            GameStatus::InProgress => to_move = to_move.opponent(),
            GameStatus::Draw => break,
            GameStatus::Won(mark) => panic!("{:?} won under optimal play:\n{}", mark, b),
        }
    }
}

#[test]
fn test_o_never_loses_against_any_x_line() {
    fn x_turn(b: &mut Board) {
        for pos in Position::ALL {
            if !b.is_empty(pos) {
                continue;
            }
            b.place(pos, Mark::X);
            match status(b, Mark::X) {
                GameStatus::Won(_) => panic!("X beat the engine:\n{}", b),
                GameStatus::Draw => {}
                GameStatus::InProgress => {
                    let reply = play_best_move(b).unwrap();
                    if status(b, Mark::O) == GameStatus::InProgress {
                        x_turn(b);
                    }
                    b.clear(reply);
                }
            }
            b.clear(pos);
        }
    }

    x_turn(&mut Board::new());
}

#[test]
fn test_root_score_against_optimal_opponent() {
    let mut b = board("X../.../...");
    let report = Searcher::default().search(&mut b).unwrap();
    assert_eq!(report.score, Score::DRAW);
    assert!(report.nodes > 0);
}
