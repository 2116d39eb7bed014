//! Tests for win and draw classification.

use tictactoe_engine::{Board, GameStatus, LINES, Mark, Position, has_win, is_full, status};

#[test]
fn test_single_line_wins_only_for_its_mark() {
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, mark);
            }
            assert!(has_win(&board, mark));
            assert!(!has_win(&board, mark.opponent()));
            assert_eq!(status(&board, mark), GameStatus::Won(mark));
        }
    }
}

#[test]
fn test_lines_cover_rows_columns_and_diagonals() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    for expected in [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ] {
        assert!(indices.contains(&expected), "missing line {:?}", expected);
    }
    assert_eq!(indices.len(), 8);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "OXO/XXO/XOX".parse().unwrap();
    assert!(is_full(&board));
    assert_eq!(status(&board, Mark::X), GameStatus::Draw);
}

#[test]
fn test_open_board_without_line_is_in_progress() {
    let board: Board = "OXO/XXO/XO.".parse().unwrap();
    assert!(!is_full(&board));
    assert_eq!(status(&board, Mark::O), GameStatus::InProgress);
    assert!(!status(&board, Mark::O).is_terminal());
}

#[test]
fn test_status_only_checks_last_mover() {
    // X holds the top row; asking about O does not report X's line.
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(status(&board, Mark::O), GameStatus::InProgress);
    assert_eq!(status(&board, Mark::X), GameStatus::Won(Mark::X));
}

#[test]
fn test_board_serializes_for_snapshots() {
    let board: Board = "X../.O./...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
