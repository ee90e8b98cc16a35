//! Aggregations the score server builds its responses from.
//!
//! The server keeps one row of local scores per registered device. These
//! helpers turn those rows into the per-user values it hands out; storing
//! rows, ordering and paging stay on the server.

use crate::error::{ScoreError, ScoreResult};
use crate::level::Level;
use crate::query::BestTimesQuery;
use crate::stats::{RegionStatistics, TimeStatistics};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One registered device's stored local scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceScores {
    pub user_id: u64,
    pub user_name: String,
    pub token: String,
    pub scores: RegionStatistics,
}

/// A user's row on the best-times leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Games")]
    pub games: u64,
    #[serde(rename = "Best")]
    pub best: u64,
    #[serde(rename = "Avg")]
    pub average: u64,
}

/// Combined scores of every device of `user_id` except the one holding
/// `token`: what that device receives as its remote region on sync.
pub fn remote_for_device(devices: &[DeviceScores], user_id: u64, token: &str) -> RegionStatistics {
    let others: Vec<&RegionStatistics> = devices
        .iter()
        .filter(|d| d.user_id == user_id && d.token != token)
        .map(|d| &d.scores)
        .collect();

    debug!(
        "Combining {} other device(s) for user {}",
        others.len(),
        user_id
    );
    RegionStatistics::combine_all(others)
}

/// Per-user totals for one level and hint bucket, one entry per user name,
/// sorted by name.
///
/// Only device buckets with at least one game finished in time take part,
/// so every entry has a defined best and average.
pub fn leaderboard_entries(
    devices: &[DeviceScores],
    level: Level,
    hints_used: bool,
) -> Vec<LeaderboardEntry> {
    devices
        .iter()
        .map(|d| (d.user_name.as_str(), d.scores.level(level).bucket(hints_used)))
        .filter(|(_, times)| times.has_valid_time())
        .sorted_by(|a, b| a.0.cmp(b.0))
        .chunk_by(|(name, _)| *name)
        .into_iter()
        .filter_map(|(name, rows)| {
            let total = rows.fold(TimeStatistics::new(), |acc, (_, times)| {
                TimeStatistics::combine(&acc, times)
            });
            let average = total.average().ok()?;
            Some(LeaderboardEntry {
                user_name: name.to_string(),
                games: total.games(),
                best: total.fastest(),
                average,
            })
        })
        .collect()
}

/// Entries for a validated leaderboard query. Order and page fields are
/// passed through untouched for the server to apply.
pub fn entries_for_query(
    devices: &[DeviceScores],
    query: &BestTimesQuery,
) -> ScoreResult<Vec<LeaderboardEntry>> {
    query.validate().map_err(ScoreError::InvalidQuery)?;
    Ok(leaderboard_entries(
        devices,
        query.level,
        query.hints.hints_used(),
    ))
}
