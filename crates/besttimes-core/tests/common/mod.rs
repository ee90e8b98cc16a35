#![allow(dead_code)]

use besttimes_core::leaderboard::DeviceScores;
use besttimes_core::{Level, RegionStatistics, ScoreRecord, TimeStatistics};
use serde_json::{json, Value};

/// Builder for a RegionStatistics with hand-picked buckets.
pub struct RegionBuilder {
    region: RegionStatistics,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self {
            region: RegionStatistics::new(),
        }
    }

    /// Plays `times` on `level` in the given bucket.
    pub fn played(mut self, level: Level, hints_used: bool, times: &[u64]) -> Self {
        for &secs in times {
            self.region.record_game(level, hints_used, secs).unwrap();
        }
        self
    }

    pub fn build(self) -> RegionStatistics {
        self.region
    }
}

pub fn device(user_id: u64, user_name: &str, token: &str, scores: RegionStatistics) -> DeviceScores {
    DeviceScores {
        user_id,
        user_name: user_name.to_string(),
        token: token.to_string(),
        scores,
    }
}

pub fn counters(t: &TimeStatistics) -> (u64, u64, u64, u64) {
    (t.games(), t.fastest(), t.total_time(), t.timed_out())
}

fn times_json(games: u64, fastest: u64, total: u64, timed_out: u64) -> Value {
    json!({ "Games": games, "Fastest": fastest, "TotalTime": total, "TimedOut": timed_out })
}

fn level_json(name: &str) -> Value {
    json!({ "Level": name, "Hint": times_json(0, 0, 0, 0), "Clean": times_json(0, 0, 0, 0) })
}

fn region_json() -> Value {
    json!({ "Easy": level_json("Easy"), "Medium": level_json("Medium") })
}

/// A registered device's document with every bucket empty.
pub fn registered_doc() -> Value {
    json!({
        "Credentials": {
            "Version": 1,
            "UserID": 42,
            "UserName": "alice",
            "Token": "0123456789abcdef0123456789abcdef",
            "Hash": "5ba93c9db0cff93f52b521d7420e43f6eda2784f"
        },
        "Server": region_json(),
        "Local": region_json()
    })
}

pub fn set_bucket(doc: &mut Value, region: &str, level: &str, bucket: &str, c: (u64, u64, u64, u64)) {
    doc[region][level][bucket] = times_json(c.0, c.1, c.2, c.3);
}

/// A record with a few games on each side, for mutation checks.
pub fn populated_record() -> ScoreRecord {
    let mut doc = registered_doc();
    set_bucket(&mut doc, "Server", "Easy", "Clean", (2, 100, 250, 0));
    set_bucket(&mut doc, "Server", "Medium", "Hint", (4, 600, 2000, 1));
    set_bucket(&mut doc, "Local", "Easy", "Clean", (3, 90, 210, 1));
    ScoreRecord::from_json(&doc.to_string(), &Default::default()).unwrap()
}
