pub mod level;
pub mod region;
pub mod times;

pub use self::level::LevelStatistics;
pub use self::region::RegionStatistics;
pub use self::times::TimeStatistics;

use crate::error::{ScoreError, ScoreResult};
use crate::level::Level;

/// Anything a caller can name a level with. Typed levels always resolve;
/// names resolve only if they are part of the closed set.
pub trait IntoLevel {
    fn into_level(self) -> ScoreResult<Level>;
}

impl IntoLevel for Level {
    fn into_level(self) -> ScoreResult<Level> {
        Ok(self)
    }
}

impl IntoLevel for &str {
    fn into_level(self) -> ScoreResult<Level> {
        self.parse()
            .map_err(|_| ScoreError::InvalidLevel(self.to_string()))
    }
}

impl IntoLevel for &String {
    fn into_level(self) -> ScoreResult<Level> {
        self.as_str().into_level()
    }
}
