use crate::level::Level;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display, ValueEnum,
)]
pub enum HintsFilter {
    Yes,
    No,
}

impl HintsFilter {
    pub fn hints_used(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for HintsFilter {
    fn from(hints_used: bool) -> Self {
        if hints_used {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Column a leaderboard page is ordered by. Ordering itself is done by the
/// score server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display, ValueEnum,
)]
pub enum SortOrder {
    UserName,
    Games,
    Best,
    Average,
}

/// Parameters of a best-times leaderboard request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BestTimesQuery {
    pub level: Level,
    pub hints: HintsFilter,
    pub order: SortOrder,
    pub page_no: u32,
    pub page_size: u32,
}

impl BestTimesQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_no < 1 {
            return Err(format!("PageNo must be at least 1, got {}", self.page_no));
        }
        if self.page_size < 1 {
            return Err(format!(
                "PageSize must be at least 1, got {}",
                self.page_size
            ));
        }
        Ok(())
    }

    /// Parses and validates a request body. Missing, extra or mistyped
    /// fields are all rejected.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let query: Self =
            serde_json::from_str(body).map_err(|e| format!("Badly formatted query: {}", e))?;
        query.validate()?;
        Ok(query)
    }
}
