use super::level::LevelStatistics;
use super::IntoLevel;
use crate::error::ScoreResult;
use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Scores for every level within one scope: a single device, or the summed
/// total of a user's other devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RegionStatistics {
    easy: LevelStatistics,
    medium: LevelStatistics,
}

impl Default for RegionStatistics {
    fn default() -> Self {
        Self {
            easy: LevelStatistics::new(Level::Easy),
            medium: LevelStatistics::new(Level::Medium),
        }
    }
}

impl RegionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: Level) -> &LevelStatistics {
        match level {
            Level::Easy => &self.easy,
            Level::Medium => &self.medium,
        }
    }

    pub fn level_mut(&mut self, level: Level) -> &mut LevelStatistics {
        match level {
            Level::Easy => &mut self.easy,
            Level::Medium => &mut self.medium,
        }
    }

    /// Levels in enumeration order.
    pub fn levels(&self) -> [&LevelStatistics; 2] {
        [&self.easy, &self.medium]
    }

    pub fn is_empty(&self) -> bool {
        self.levels().iter().all(|l| l.is_empty())
    }

    /// Routes a finished game to its level. An unknown level fails before
    /// anything is touched.
    pub fn record_game(
        &mut self,
        level: impl IntoLevel,
        hints_used: bool,
        secs: u64,
    ) -> ScoreResult<bool> {
        let level = level.into_level()?;
        Ok(self.level_mut(level).record_game(hints_used, secs))
    }

    pub fn combine(a: &Self, b: &Self) -> Self {
        Self {
            easy: LevelStatistics::combine(&a.easy, &b.easy),
            medium: LevelStatistics::combine(&a.medium, &b.medium),
        }
    }

    /// Folds any number of regions into one, starting from an empty region.
    pub fn combine_all<'a>(regions: impl IntoIterator<Item = &'a Self>) -> Self {
        regions
            .into_iter()
            .fold(Self::new(), |acc, region| Self::combine(&acc, region))
    }
}
