//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::session::GameSession;
use anyhow::Result;
use tictactoe_engine::Position;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark.
    Place(Position),
    /// Start a new game.
    Reset,
    /// Switch between human and AI opponent.
    ToggleMode,
    /// Leave the game.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses an action for the current turn.
    async fn choose(&mut self, session: &GameSession) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
