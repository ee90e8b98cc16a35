use crate::audit::{self, AuditFinding};
use crate::consts::SCHEMA_VERSION;
use crate::error::{ScoreError, ScoreResult};
use crate::level::Level;
use crate::protocol::GameFinished;
use crate::schema::SchemaValidator;
use crate::stats::{IntoLevel, LevelStatistics, RegionStatistics};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Identity of a device as issued by the score server. The core stores and
/// round-trips it but never computes or checks any of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    #[serde(rename = "Version")]
    pub version: u32,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            user_id: 0,
            user_name: String::new(),
            token: String::new(),
            hash: String::new(),
        }
    }
}

impl Credentials {
    pub fn is_registered(&self) -> bool {
        self.user_id != 0
    }
}

/// The score document a device keeps and exchanges with the server.
///
/// `remote` holds the combined totals of the user's other devices and is
/// only ever replaced wholesale. `local` is this device's own scores and is
/// the only part gameplay mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScoreRecord {
    #[serde(rename = "Credentials")]
    credentials: Credentials,
    #[serde(rename = "Server")]
    remote: RegionStatistics,
    #[serde(rename = "Local")]
    local: RegionStatistics,
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty, unregistered record stamped with `version`, so it loads
    /// back under a validator pinned to the same version.
    pub fn with_version(version: u32) -> Self {
        Self {
            credentials: Credentials {
                version,
                ..Credentials::default()
            },
            ..Self::default()
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn remote(&self) -> &RegionStatistics {
        &self.remote
    }

    pub fn local(&self) -> &RegionStatistics {
        &self.local
    }

    pub fn is_registered(&self) -> bool {
        self.credentials.is_registered()
    }

    /// Records a finished game against this device's scores.
    pub fn record_game(
        &mut self,
        level: impl IntoLevel,
        hints_used: bool,
        secs: u64,
    ) -> ScoreResult<bool> {
        let level = level.into_level()?;
        let timed_out = self.local.record_game(level, hints_used, secs)?;
        debug!(
            "Recorded {} game (hints: {}) in {}s{}",
            level,
            hints_used,
            secs,
            if timed_out { ", timed out" } else { "" }
        );
        Ok(timed_out)
    }

    pub fn apply(&mut self, event: &GameFinished) -> ScoreResult<bool> {
        self.record_game(event.level, event.hints_used, event.elapsed_secs)
    }

    /// Remote and local scores of one level merged into a fresh value.
    pub fn combined_level(&self, level: impl IntoLevel) -> ScoreResult<LevelStatistics> {
        let level = level.into_level()?;
        Ok(LevelStatistics::combine(
            self.remote.level(level),
            self.local.level(level),
        ))
    }

    pub fn combined(&self) -> RegionStatistics {
        RegionStatistics::combine(&self.remote, &self.local)
    }

    pub fn combined_levels(&self) -> Vec<LevelStatistics> {
        Level::iter()
            .map(|level| LevelStatistics::combine(self.remote.level(level), self.local.level(level)))
            .collect()
    }

    /// Installs the other devices' totals as sent by the server.
    pub fn replace_remote(&mut self, remote: RegionStatistics) {
        self.remote = remote;
    }

    /// Parses a stored or transmitted document. Nothing is built unless the
    /// whole payload passes `validator`.
    pub fn from_json(payload: &str, validator: &SchemaValidator) -> ScoreResult<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| ScoreError::MalformedData(format!("not valid JSON: {}", e)))?;

        validator
            .validate(&value)
            .map_err(|v| ScoreError::MalformedData(v.to_string()))?;

        serde_json::from_value(value).map_err(|e| ScoreError::MalformedData(e.to_string()))
    }

    /// Replaces identity, remote and local state from `payload`. On error
    /// the record is left exactly as it was.
    pub fn load_from(&mut self, payload: &str, validator: &SchemaValidator) -> ScoreResult<()> {
        *self = Self::from_json(payload, validator)?;
        Ok(())
    }

    /// Applies a server sync response: credentials and remote totals are
    /// taken wholesale, local scores stay as they are.
    pub fn apply_sync(&mut self, response: &str, validator: &SchemaValidator) -> ScoreResult<()> {
        let synced = Self::from_json(response, validator)?;
        info!(
            "Synced remote totals for user {} ({})",
            synced.credentials.user_id, synced.credentials.user_name
        );
        self.credentials = synced.credentials;
        self.remote = synced.remote;
        Ok(())
    }

    pub fn to_json(&self) -> ScoreResult<String> {
        serde_json::to_string(self).map_err(|e| ScoreError::MalformedData(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> ScoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScoreError::MalformedData(e.to_string()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, validator: &SchemaValidator) -> ScoreResult<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content, validator)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> ScoreResult<()> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        fs::write(&path, json)?;
        debug!("Saved scores to {}", path.as_ref().display());
        Ok(())
    }

    /// Buckets whose counters break the numeric invariants. Loading never
    /// checks these; callers decide what to do with the findings.
    pub fn audit(&self) -> Vec<AuditFinding> {
        audit::audit(self)
    }
}
