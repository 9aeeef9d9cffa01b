//! CLI frontend for the Whitehack character keeper.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{CliConfig, DEFAULT_STORE_PATH};

#[derive(Parser)]
#[command(
    name = "wh",
    about = "Keep, import and export Whitehack characters",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file the characters are stored in
    #[arg(long, global = true, env = "WH_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Key the character list is stored under
    #[arg(long, global = true, default_value = wh_core::CHARACTERS_KEY)]
    key: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored characters
    List,

    /// Show one character in full
    Show {
        /// Character name, ID, or ID prefix
        query: String,
    },

    /// Create a character with default values
    New {
        /// Character name
        name: String,

        /// Class (deft, strong, wise, brave, clever, fortunate)
        #[arg(short, long, default_value = "deft")]
        class: String,

        /// Player name
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Delete a character
    Delete {
        /// Character name, ID, or ID prefix
        query: String,
    },

    /// Import characters from a JSON file, or `-` for stdin
    Import {
        /// Source file
        source: String,
    },

    /// Export all characters as canonical JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the canonical form of character JSON without storing it
    Normalize {
        /// Source file, or `-` for stdin
        source: String,
    },

    /// Show the advancement table for a class
    Stats {
        /// Class name
        class: String,

        /// Only this level
        #[arg(short, long)]
        level: Option<i64>,
    },

    /// Level reached with an amount of experience
    Level {
        /// Class name
        class: String,

        /// Experience points
        xp: i64,
    },

    /// Experience needed to reach a level
    Xp {
        /// Class name
        class: String,

        /// Target level
        level: i64,
    },
}

fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = CliConfig::default()
        .with_store_path(cli.store)
        .with_key(&cli.key)
        .with_verbose(cli.verbose);
    init_logging(&config);

    let result = match cli.command {
        Commands::List => commands::list::run(&config),
        Commands::Show { query } => commands::show::run(&config, &query),
        Commands::New {
            name,
            class,
            player,
        } => commands::new::run(&config, &name, &class, player.as_deref()),
        Commands::Delete { query } => commands::delete::run(&config, &query),
        Commands::Import { source } => commands::import::run(&config, &source),
        Commands::Export { output } => commands::export::run(&config, output.as_deref()),
        Commands::Normalize { source } => commands::normalize::run(&source),
        Commands::Stats { class, level } => commands::stats::run_table(&class, level),
        Commands::Level { class, xp } => commands::stats::run_level(&class, xp),
        Commands::Xp { class, level } => commands::stats::run_xp(&class, level),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
