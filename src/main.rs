use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "terra")]
#[command(about = "TERRA - wake-word command classifier for a business voice assistant")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.terra/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an utterance (reads one utterance per stdin line when no text is given)
    Classify {
        /// Utterance words, joined with spaces
        text: Vec<String>,

        /// Print each classification step to stderr
        #[arg(long)]
        explain: bool,

        /// Print a JSON object with label and reply text
        #[arg(long)]
        json: bool,

        /// Do not require the wake word
        #[arg(long)]
        no_wake_word: bool,
    },

    /// List categories in matching priority order
    Categories {
        /// Also list every pattern phrase
        #[arg(long)]
        phrases: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Run the HTTP endpoint for the browser front end
    Serve {
        /// Port to listen on (overrides [server].port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Classify {
            text,
            explain,
            json,
            no_wake_word,
        } => {
            let options = cli::classify::ClassifyOptions {
                explain,
                json,
                no_wake_word,
            };
            cli::classify::classify_command(config, &text, &options)?;
        }
        Commands::Categories { phrases } => {
            cli::categories::categories_command(config, phrases)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config, force)?;
        }
        Commands::Serve { port } => {
            cli::serve::serve_command(config, port)?;
        }
    }

    Ok(())
}
