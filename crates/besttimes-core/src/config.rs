use crate::consts::SCHEMA_VERSION;
use crate::error::{ScoreError, ScoreResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credentials version accepted when loading score documents.
    #[arg(long, default_value_t = SCHEMA_VERSION)]
    pub schema_version: u32,

    /// Pretty-print score documents when saving.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            pretty: true,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ScoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoreError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ScoreError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    /// Overrides fields with CLI values, but only those the user actually
    /// typed; clap defaults never shadow the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(schema_version, "schema_version");
        update_if_present!(pretty, "pretty");
    }
}
