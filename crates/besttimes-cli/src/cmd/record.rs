use crate::store;
use besttimes_core::config::Config;
use besttimes_core::error::ScoreResult;
use besttimes_core::protocol::GameFinished;
use besttimes_core::util::format_minutes;
use besttimes_core::{Level, SchemaValidator};
use clap::Args;
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[arg(short, long, value_enum)]
    pub level: Level,

    /// Elapsed time in whole seconds.
    #[arg(short, long)]
    pub time: u64,

    /// The board was finished with hints.
    #[arg(long, default_value_t = false)]
    pub hints: bool,
}

pub fn run(
    args: RecordArgs,
    path: &Path,
    settings: &Config,
    validator: &SchemaValidator,
) -> ScoreResult<()> {
    let mut record = store::load_or_create(path, settings, validator)?;

    let event = GameFinished::new(args.level, args.hints, args.time);
    let timed_out = record.apply(&event)?;

    if timed_out {
        warn!("⏱️  Over the time limit, counted as timed out");
        println!("{} board recorded as timed out", args.level);
    } else {
        println!(
            "{} board recorded in {}{}",
            args.level,
            format_minutes(args.time),
            if args.hints { " (hints)" } else { "" }
        );
    }

    store::save(&record, path, settings)
}
