pub use besttimes_protocol::SCHEMA_VERSION;

/// Longest elapsed time, in seconds, that still counts as a finished game.
/// Anything slower is recorded as timed out.
pub const TIMEOUT_THRESHOLD_SECS: u64 = 3599;

/// Field names of the four counters kept per bucket, in document order.
pub const COUNTER_FIELDS: [&str; 4] = ["Games", "Fastest", "TotalTime", "TimedOut"];

/// The two buckets kept per level.
pub const BUCKET_FIELDS: [&str; 2] = ["Hint", "Clean"];
