//! Terminal front end for the tic-tac-toe engine.
//!
//! Holds the game flow around [`tictactoe_engine`]: session state, players,
//! orchestration, rendering and configuration.

#![warn(missing_docs)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod mode;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod session;

pub use analysis::{Analysis, analyze};
pub use config::{ConfigError, GameConfig};
pub use mode::GameMode;
pub use orchestrator::{GameEvent, Orchestrator, self_play};
pub use players::{Action, HumanPlayer, MinimaxPlayer, Player};
pub use session::{GameSession, SessionError, Turn};
