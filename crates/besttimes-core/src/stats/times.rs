use crate::consts::TIMEOUT_THRESHOLD_SECS;
use crate::error::{ScoreError, ScoreResult};
use serde::{Deserialize, Serialize};

/// Best-time counters for one bucket of play (one level, with or without
/// hints).
///
/// `fastest` only means something while at least one game finished inside
/// the time limit; a fresh instance starts at zero and `combine` relies on
/// that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TimeStatistics {
    games: u64,
    fastest: u64,
    total_time: u64,
    timed_out: u64,
}

impl TimeStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a bucket wholesale from stored counters. No invariant is
    /// checked here; see [`TimeStatistics::is_consistent`].
    pub fn from_counters(games: u64, fastest: u64, total_time: u64, timed_out: u64) -> Self {
        Self {
            games,
            fastest,
            total_time,
            timed_out,
        }
    }

    pub fn games(&self) -> u64 {
        self.games
    }

    pub fn fastest(&self) -> u64 {
        self.fastest
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn timed_out(&self) -> u64 {
        self.timed_out
    }

    /// Games that finished within the time limit.
    pub fn valid_games(&self) -> u64 {
        self.games.saturating_sub(self.timed_out)
    }

    pub fn has_valid_time(&self) -> bool {
        self.valid_games() > 0
    }

    /// Records one finished game. Returns `true` when the game was slower
    /// than the limit and only counted as timed out.
    ///
    /// Counters saturate at `u64::MAX` instead of wrapping.
    pub fn record_game(&mut self, secs: u64) -> bool {
        self.games = self.games.saturating_add(1);

        if secs > TIMEOUT_THRESHOLD_SECS {
            self.timed_out = self.timed_out.saturating_add(1);
            return true;
        }

        if self.valid_games() == 1 || secs < self.fastest {
            self.fastest = secs;
        }
        self.total_time = self.total_time.saturating_add(secs);
        false
    }

    /// Mean time of the games that finished in time, rounded down.
    pub fn average(&self) -> ScoreResult<u64> {
        match self.valid_games() {
            0 => Err(ScoreError::UndefinedAverage),
            valid => Ok(self.total_time / valid),
        }
    }

    /// Merges two buckets into a new one.
    ///
    /// Counts and total time add up, saturating at `u64::MAX`. For
    /// `fastest`, a side without games defers to the other side verbatim;
    /// otherwise the smaller value wins.
    pub fn combine(a: &Self, b: &Self) -> Self {
        let fastest = if a.games == 0 {
            b.fastest
        } else if b.games == 0 {
            a.fastest
        } else {
            a.fastest.min(b.fastest)
        };

        Self {
            games: a.games.saturating_add(b.games),
            fastest,
            total_time: a.total_time.saturating_add(b.total_time),
            timed_out: a.timed_out.saturating_add(b.timed_out),
        }
    }

    /// True when the counters could have been produced by `record_game`
    /// and `combine` alone.
    pub fn is_consistent(&self) -> bool {
        self.inconsistencies().is_empty()
    }

    /// Describes every numeric invariant the counters break.
    pub fn inconsistencies(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.timed_out > self.games {
            problems.push(format!(
                "TimedOut ({}) exceeds Games ({})",
                self.timed_out, self.games
            ));
        }

        if self.has_valid_time() {
            if self.fastest > self.total_time {
                problems.push(format!(
                    "Fastest ({}) exceeds TotalTime ({})",
                    self.fastest, self.total_time
                ));
            }
        } else if self.fastest != 0 || self.total_time != 0 {
            problems.push(format!(
                "no game finished in time but Fastest is {} and TotalTime is {}",
                self.fastest, self.total_time
            ));
        }

        problems
    }
}
