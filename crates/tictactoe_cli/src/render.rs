//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use std::io::Write;

/// Help line shown at start-up.
pub const HELP: &str = "Squares are numbered 1-9. Commands: r = reset, m = toggle AI/human, q = quit.";

/// Writes one event to `out`.
pub fn render_event(event: &GameEvent, out: &mut impl Write) -> std::io::Result<()> {
    match event {
        GameEvent::StateChanged { board, turn_line } => {
            writeln!(out, "\n{}\n", board)?;
            if !turn_line.is_empty() {
                writeln!(out, "{}", turn_line)?;
            }
        }
        GameEvent::AiThinking => {}
        GameEvent::MoveMade { mover, position } => {
            writeln!(out, "{} plays {} ({})", mover, position, position.to_index() + 1)?;
        }
        GameEvent::ModeChanged(mode) => writeln!(out, "Mode: {}", mode.name())?,
        GameEvent::GameOver(message) => {
            writeln!(out, "{}", message)?;
            writeln!(out, "Press r to play again or q to quit.")?;
        }
        GameEvent::Rejected(reason) => writeln!(out, "{}", reason)?,
    }
    out.flush()
}
