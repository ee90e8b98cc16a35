use super::times::TimeStatistics;
use crate::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LevelStatistics {
    level: Level,
    hint: TimeStatistics,
    clean: TimeStatistics,
}

impl LevelStatistics {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            hint: TimeStatistics::new(),
            clean: TimeStatistics::new(),
        }
    }

    pub fn from_buckets(level: Level, hint: TimeStatistics, clean: TimeStatistics) -> Self {
        Self { level, hint, clean }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Games finished with at least one hint.
    pub fn hint(&self) -> &TimeStatistics {
        &self.hint
    }

    /// Games finished without hints.
    pub fn clean(&self) -> &TimeStatistics {
        &self.clean
    }

    pub fn bucket(&self, hints_used: bool) -> &TimeStatistics {
        if hints_used {
            &self.hint
        } else {
            &self.clean
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hint.games() == 0 && self.clean.games() == 0
    }

    pub fn record_game(&mut self, hints_used: bool, secs: u64) -> bool {
        if hints_used {
            self.hint.record_game(secs)
        } else {
            self.clean.record_game(secs)
        }
    }

    /// Bucket-wise merge. Both sides must describe the same level; the
    /// result carries the level of `a`.
    pub fn combine(a: &Self, b: &Self) -> Self {
        debug_assert_eq!(a.level, b.level);
        Self {
            level: a.level,
            hint: TimeStatistics::combine(&a.hint, &b.hint),
            clean: TimeStatistics::combine(&a.clean, &b.clean),
        }
    }
}
