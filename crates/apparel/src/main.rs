//! Apparel CLI - describe the clothing in an image as structured JSON.
//!
//! # Usage
//!
//! ```bash
//! # Describe one image (key from GEMINI_API_KEY)
//! apparel describe jacket.jpg
//!
//! # Use another model, compact output
//! apparel describe jacket.jpg --model gemini-2.5-flash --compact
//!
//! # View configuration
//! apparel config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Apparel - structured apparel attributes from an image.
#[derive(Parser, Debug)]
#[command(name = "apparel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe the apparel item in an image
    Describe(cli::describe::DescribeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match apparel_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `apparel config path`."
            );
            apparel_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Apparel v{}", apparel_core::VERSION);

    match cli.command {
        Commands::Describe(args) => cli::describe::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
