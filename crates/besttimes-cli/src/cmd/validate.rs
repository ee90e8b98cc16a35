use besttimes_core::error::ScoreResult;
use besttimes_core::{ScoreRecord, SchemaValidator};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Score document to check.
    pub file: PathBuf,
}

pub fn run(args: ValidateArgs, validator: &SchemaValidator) -> ScoreResult<()> {
    let content = fs::read_to_string(&args.file)?;

    println!("\n🔎 === SCORE AUDIT: {} === 🔎", args.file.display());

    let record = match ScoreRecord::from_json(&content, validator) {
        Ok(record) => record,
        Err(e) => {
            println!("INVALID {}", e);
            return Err(e);
        }
    };

    println!("OK");

    let findings = record.audit();
    for finding in &findings {
        warn!("⚠️  {}", finding);
        println!("WARNING {}", finding);
    }

    Ok(())
}
