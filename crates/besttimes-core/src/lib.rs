// Re-export types from the protocol crate so they are accessible via besttimes_core::*
pub use besttimes_protocol::level;
pub use besttimes_protocol::protocol;
pub use besttimes_protocol::query;

pub mod audit;
pub mod config;
pub mod consts;
pub mod error;
pub mod leaderboard;
pub mod record;
pub mod schema;
pub mod stats;
pub mod util;

pub use self::level::Level;
pub use self::record::{Credentials, ScoreRecord};
pub use self::schema::SchemaValidator;
pub use self::stats::{IntoLevel, LevelStatistics, RegionStatistics, TimeStatistics};
