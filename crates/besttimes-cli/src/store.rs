use besttimes_core::config::Config;
use besttimes_core::error::ScoreResult;
use besttimes_core::{ScoreRecord, SchemaValidator};
use std::path::Path;
use tracing::info;

/// Loads the score document at `path`, or starts an empty one at the
/// configured version if the file does not exist yet. A file that exists
/// but fails validation is an error.
pub fn load_or_create(
    path: &Path,
    settings: &Config,
    validator: &SchemaValidator,
) -> ScoreResult<ScoreRecord> {
    if !path.exists() {
        info!("📄 No scores at {}, starting fresh", path.display());
        return Ok(ScoreRecord::with_version(settings.schema_version));
    }

    info!("📂 Loading scores: {}", path.display());
    ScoreRecord::load_from_file(path, validator)
}

pub fn save(record: &ScoreRecord, path: &Path, settings: &Config) -> ScoreResult<()> {
    record.save_to_file(path, settings.pretty)?;
    info!("💾 Saved scores: {}", path.display());
    Ok(())
}
