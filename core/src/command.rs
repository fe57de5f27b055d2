use crate::{catalog::ActionKind, clock::SimSpeed};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Clock control ─────────────────────────────
    Pause,
    Resume,
    SetSpeed { speed: SimSpeed },

    // ── Catalog ───────────────────────────────────
    Purchase { action: ActionKind },
}

impl PlayerCommand {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Pause           => "pause",
            Self::Resume          => "resume",
            Self::SetSpeed { .. } => "set_speed",
            Self::Purchase { .. } => "purchase",
        }
    }
}
