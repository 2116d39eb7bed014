//! Human player reading commands from a line-oriented input.

use super::{Action, Player};
use crate::session::GameSession;
use anyhow::{Context, Result};
use tictactoe_engine::Position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

/// Human at a terminal (or any line source).
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// Parses one line of input.
///
/// Squares are numbered 1-9 as on the rendered board. A label such as
/// `center`, or a prefix naming exactly one label, also works.
#[instrument]
pub fn parse_action(line: &str) -> Action {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Action::Quit,
        "r" | "reset" => return Action::Reset,
        "m" | "mode" => return Action::ToggleMode,
        _ => {}
    }

    if let Ok(num) = line.parse::<usize>() {
        return match num.checked_sub(1).and_then(Position::from_index) {
            Some(pos) => Action::Place(pos),
            None => Action::Unrecognized(line.to_string()),
        };
    }

    match Position::from_label(line) {
        Some(pos) => Action::Place(pos),
        None => Action::Unrecognized(line.to_string()),
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn choose(&mut self, _session: &GameSession) -> Result<Action> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .context("Failed to read player input")?;

        if read == 0 {
            debug!(player = %self.name, "Input closed");
            return Ok(Action::Quit);
        }

        let action = parse_action(&line);
        debug!(player = %self.name, ?action, "Human input");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
