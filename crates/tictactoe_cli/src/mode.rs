//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the terminal.
    #[strum(serialize = "human")]
    #[serde(rename = "human")]
    HumanVsHuman,
    /// Human plays X, the minimax engine plays O.
    #[default]
    #[strum(serialize = "ai")]
    #[serde(rename = "ai")]
    HumanVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsAi,
            GameMode::HumanVsAi => GameMode::HumanVsHuman,
        }
    }
}
