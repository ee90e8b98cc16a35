/// Splits a duration in seconds into whole minutes and remaining seconds.
pub fn split_minutes(secs: u64) -> (u64, u64) {
    (secs / 60, secs % 60)
}

/// Formats seconds as `m:ss`, e.g. `125` -> `"2:05"`. Minutes are not
/// capped or padded.
pub fn format_minutes(secs: u64) -> String {
    let (minutes, seconds) = split_minutes(secs);
    format!("{}:{:02}", minutes, seconds)
}
