use crate::{reports, store};
use besttimes_core::config::Config;
use besttimes_core::error::ScoreResult;
use besttimes_core::{Level, SchemaValidator};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Only show this level.
    #[arg(short, long, value_enum)]
    pub level: Option<Level>,
}

pub fn run(
    args: ShowArgs,
    path: &Path,
    settings: &Config,
    validator: &SchemaValidator,
) -> ScoreResult<()> {
    let record = store::load_or_create(path, settings, validator)?;

    let levels: Vec<_> = record
        .combined_levels()
        .into_iter()
        .filter(|l| args.level.map_or(true, |wanted| l.level() == wanted))
        .filter(|l| !l.is_empty())
        .collect();

    if levels.is_empty() {
        println!("No games recorded yet.");
        return Ok(());
    }

    for level in &levels {
        reports::print_best_times(level);
    }
    Ok(())
}
