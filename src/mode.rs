//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the keyboard
    TwoPlayer,
    /// Human vs minimax AI
    #[default]
    VsAi,
}

impl GameMode {
    /// Both modes in menu order.
    pub const ALL: [GameMode; 2] = [GameMode::TwoPlayer, GameMode::VsAi];

    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Play vs Player",
            GameMode::VsAi => "Play vs AI",
        }
    }

    /// Whether the AI takes the other symbol.
    pub fn is_vs_ai(&self) -> bool {
        matches!(self, GameMode::VsAi)
    }

    /// Mode matching a `vs_ai` flag.
    pub fn from_vs_ai(vs_ai: bool) -> Self {
        if vs_ai {
            GameMode::VsAi
        } else {
            GameMode::TwoPlayer
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsAi,
            GameMode::VsAi => GameMode::TwoPlayer,
        }
    }
}
