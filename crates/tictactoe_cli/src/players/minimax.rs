//! Engine-backed player.

use super::{Action, Player};
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_engine::Searcher;
use tracing::{debug, info};

/// Plays perfect moves for whichever mark is to move.
pub struct MinimaxPlayer {
    name: String,
    searcher: Searcher,
    delay: Duration,
}

impl MinimaxPlayer {
    /// Creates an engine player that waits `delay` before answering.
    pub fn new(name: impl Into<String>, searcher: Searcher, delay: Duration) -> Self {
        Self {
            name: name.into(),
            searcher,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn choose(&mut self, session: &GameSession) -> Result<Action> {
        debug!(ai = %self.name, scoring = %self.searcher.scoring(), "AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut board = *session.board();
        let report = self
            .searcher
            .search_as(&mut board, *session.to_move())
            .context("Engine asked to move on a full board")?;

        info!(
            ai = %self.name,
            scoring = %self.searcher.scoring(),
            position = %report.position,
            score = %report.score,
            nodes = report.nodes,
            "AI chose position"
        );
        Ok(Action::Place(report.position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GameMode;
    use tictactoe_engine::Position;

    #[tokio::test]
    async fn test_takes_win_for_side_to_move() {
        let mut session = GameSession::new(GameMode::HumanVsAi);
        for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter, Position::Center] {
            session.play(pos).unwrap();
        }
        // X to move with two in the top row.
        let mut ai = MinimaxPlayer::new("AI", Searcher::default(), Duration::ZERO);
        assert_eq!(ai.choose(&session).await.unwrap(), Action::Place(Position::TopRight));
    }

    #[tokio::test]
    async fn test_full_board_is_an_error() {
        let mut session = GameSession::new(GameMode::HumanVsHuman);
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.play(Position::from_index(i).unwrap()).unwrap();
        }
        let mut ai = MinimaxPlayer::new("AI", Searcher::default(), Duration::ZERO);
        assert!(ai.choose(&session).await.is_err());
    }
}
