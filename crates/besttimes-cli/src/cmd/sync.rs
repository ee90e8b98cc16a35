use crate::store;
use besttimes_core::config::Config;
use besttimes_core::error::ScoreResult;
use besttimes_core::SchemaValidator;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Score document returned by the server.
    pub response: PathBuf,
}

pub fn run(
    args: SyncArgs,
    path: &Path,
    settings: &Config,
    validator: &SchemaValidator,
) -> ScoreResult<()> {
    let response = fs::read_to_string(&args.response)?;

    let mut record = store::load_or_create(path, settings, validator)?;
    record.apply_sync(&response, validator)?;

    println!(
        "Synced as {} (user {})",
        record.credentials().user_name,
        record.credentials().user_id
    );
    store::save(&record, path, settings)
}
