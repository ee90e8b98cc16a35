use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Difficulty tier of a finished board. The set is closed: documents and
/// events naming any other level are rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    ValueEnum,
)]
pub enum Level {
    Easy,
    Medium,
}

impl Level {
    /// Stable field name used in score documents and leaderboard queries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
        }
    }

    /// Numeric id the score server stores for this level.
    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
        }
    }
}
