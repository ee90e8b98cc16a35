use besttimes_core::config::Config;
use besttimes_core::error::ScoreResult;
use besttimes_core::SchemaValidator;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

mod cmd;
mod reports;
mod store;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sudoku best-times keeper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Score document to read and update.
    #[arg(global = true, short, long, default_value = "scores.json")]
    scores: PathBuf,

    /// JSON settings file. Flags given on the command line win over it.
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[command(flatten)]
    settings: Config,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a finished board.
    Record(cmd::record::RecordArgs),
    /// Print best-time tables.
    Show(cmd::show::ShowArgs),
    /// Check a score document against the schema.
    Validate(cmd::validate::ValidateArgs),
    /// Apply a server sync response to the score document.
    Sync(cmd::sync::SyncArgs),
    /// Print the score document JSON Schema.
    Schema,
}

fn load_settings(cli: &Cli, matches: &clap::ArgMatches) -> ScoreResult<Config> {
    let Some(path) = &cli.config_file else {
        return Ok(cli.settings.clone());
    };

    info!("⚙️  Loading settings from: {}", path.display());
    let mut settings = Config::load_from_file(path)?;
    settings.merge_from_cli(&cli.settings, matches);
    Ok(settings)
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let settings = load_settings(&cli, &matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    debug!("Effective settings: {:?}", settings);

    let validator = SchemaValidator::new(&settings);

    let result = match cli.command {
        Commands::Record(args) => cmd::record::run(args, &cli.scores, &settings, &validator),
        Commands::Show(args) => cmd::show::run(args, &cli.scores, &settings, &validator),
        Commands::Validate(args) => cmd::validate::run(args, &validator),
        Commands::Sync(args) => cmd::sync::run(args, &cli.scores, &settings, &validator),
        Commands::Schema => cmd::schema::run(&validator),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
