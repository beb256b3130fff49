//! Variate CLI - random variates from the command line
//!
//! # Commands
//!
//! - `variate generate --dist <id> --params "<p1> <p2>"` - Draw variates and export them as CSV
//! - `variate list` - Show the supported distributions and their parameter bounds
//!
//! Settings come from `variate.toml`, `VARIATE_*` environment variables and
//! flags, in increasing order of precedence.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod export;
mod params;

pub use error::{CliError, Result};

use crate::commands::generate::GenerateArgs;
use crate::config::CliConfig;

/// Random variate generator CLI
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to variate.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw variates from a distribution and export them as CSV
    Generate {
        /// Distribution identifier (e.g. normal, gamma, binomial)
        #[arg(short, long)]
        dist: String,

        /// Whitespace-separated parameters, e.g. "0 1"
        #[arg(short, long, allow_hyphen_values = true)]
        params: String,

        /// Number of variates to draw
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw from a single generator stream instead of seeded chunks
        #[arg(long)]
        sequential: bool,
    },

    /// List the supported distributions
    List,
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            dist,
            params,
            samples,
            seed,
            output,
            sequential,
        } => {
            let args = GenerateArgs {
                dist,
                params,
                samples,
                seed,
                output,
                sequential,
            };
            commands::generate::run(&args, &config).map(|_| ())
        }
        Commands::List => commands::list::run(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
