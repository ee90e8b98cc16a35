use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Emitted by the game once a board is solved.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GameFinished {
    pub level: Level,
    pub hints_used: bool,
    pub elapsed_secs: u64,
}

impl GameFinished {
    pub fn new(level: Level, hints_used: bool, elapsed_secs: u64) -> Self {
        Self {
            level,
            hints_used,
            elapsed_secs,
        }
    }
}

/// Body the score server answers with when a request fails.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}
