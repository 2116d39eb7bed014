//! Game orchestration between players.

use crate::mode::GameMode;
use crate::players::{Action, Player};
use crate::session::GameSession;
use anyhow::Result;
use tictactoe_engine::{Board, GameStatus, Mark, Position, Searcher};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board or turn changed.
    StateChanged {
        /// Current board.
        board: Board,
        /// Whose turn, or empty once the game is over.
        turn_line: String,
    },
    /// The engine is choosing a move.
    AiThinking,
    /// A mark was placed.
    MoveMade {
        /// Mark that moved.
        mover: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// The opponent mode changed (the game restarts).
    ModeChanged(GameMode),
    /// Game ended; carries the outcome line.
    GameOver(String),
    /// Input or move was refused.
    Rejected(String),
}

/// Orchestrates gameplay between the human and the engine.
pub struct Orchestrator {
    session: GameSession,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        mode: GameMode,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: GameSession::new(mode),
            human,
            computer,
            event_tx,
        }
    }

    /// Current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until a player quits.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.emit_state()?;

        loop {
            let computer = self.session.computer_to_move();
            let player = if computer {
                self.event_tx.send(GameEvent::AiThinking)?;
                &mut self.computer
            } else {
                &mut self.human
            };

            debug!(player = %player.name(), "Waiting for action");
            let action = player.choose(&self.session).await?;

            match action {
                Action::Quit => {
                    info!("Player quit");
                    return Ok(());
                }
                Action::Reset => {
                    self.session.reset();
                    self.emit_state()?;
                }
                Action::ToggleMode => {
                    self.session.toggle_mode();
                    self.event_tx.send(GameEvent::ModeChanged(*self.session.mode()))?;
                    self.emit_state()?;
                }
                Action::Place(position) => match self.session.play(position) {
                    Ok(turn) => {
                        self.event_tx.send(GameEvent::MoveMade {
                            mover: turn.mover,
                            position: turn.position,
                        })?;
                        self.emit_state()?;
                        if turn.status.is_terminal() {
                            self.event_tx.send(GameEvent::GameOver(self.session.message()))?;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        self.event_tx.send(GameEvent::Rejected(e.to_string()))?;
                    }
                },
                Action::Unrecognized(text) => {
                    self.event_tx
                        .send(GameEvent::Rejected(format!("Unrecognized input '{}'", text)))?;
                }
            }
        }
    }

    fn emit_state(&self) -> Result<()> {
        self.event_tx.send(GameEvent::StateChanged {
            board: *self.session.board(),
            turn_line: self.session.turn_line(),
        })?;
        Ok(())
    }
}

/// Plays the engine against itself from an empty board.
///
/// Returns the final board and its status.
#[instrument(skip(searcher))]
pub fn self_play(searcher: &Searcher) -> Result<(Board, GameStatus)> {
    let mut session = GameSession::new(GameMode::HumanVsHuman);
    while session.is_active() {
        let mut board = *session.board();
        let report = searcher.search_as(&mut board, *session.to_move())?;
        session.play(report.position)?;
    }
    Ok((*session.board(), *session.status()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Scoring;

    #[test]
    fn test_self_play_draws_with_either_scoring() {
        for scoring in [Scoring::Flat, Scoring::DepthAware] {
            let (board, status) = self_play(&Searcher::new(scoring)).unwrap();
            assert_eq!(status, GameStatus::Draw);
            assert_eq!(board.occupied_count(), 9);
        }
    }
}
