//! Game session state.
//!
//! Everything the game flow needs between moves lives here as plain
//! values: the board, whose turn it is, the derived status and the mode.

use crate::mode::GameMode;
use derive_getters::Getters;
use tictactoe_engine::{Board, GameStatus, Mark, Position, status};
use tracing::{debug, info, instrument};

/// One completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Mark that moved.
    pub mover: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Status of the board after the move.
    pub status: GameStatus,
}

/// A move the session refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for SessionError {}

/// State of a single game plus the opponent mode.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Mark to move next.
    to_move: Mark,
    /// Derived after every move.
    status: GameStatus,
    /// Who plays O.
    mode: GameMode,
}

impl GameSession {
    /// Creates a fresh game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// True while moves can still be made.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True when the engine should choose the next move.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.is_active() && self.to_move == Mark::O
    }

    /// Places the current mark at `position` and hands the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the game is over or the square is taken.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Turn, SessionError> {
        if !self.is_active() {
            return Err(SessionError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(SessionError::SquareOccupied(position));
        }

        let mover = self.to_move;
        self.board.place(position, mover);
        self.status = status(&self.board, mover);
        if self.is_active() {
            self.to_move = mover.opponent();
        } else {
            info!(status = ?self.status, "Game over");
        }

        debug!(%position, status = ?self.status, "Move applied");
        Ok(Turn {
            mover,
            position,
            status: self.status,
        })
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
    }

    /// Switches opponent mode and starts a new game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    /// Outcome line: empty while the game is running.
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::Won(mark) => format!("{} wins!", mark),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => String::new(),
        }
    }

    /// Turn line: empty once the game is over.
    pub fn turn_line(&self) -> String {
        if !self.is_active() {
            String::new()
        } else if self.computer_to_move() {
            "AI is thinking...".to_string()
        } else {
            format!("{}'s turn", self.to_move)
        }
    }
}
