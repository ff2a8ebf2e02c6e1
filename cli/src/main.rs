//! # PyChat Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `pychat` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in the `pychat` library
//!
//! ## Examples
//!
//! ```bash
//! # Start the tutor server on 127.0.0.1:5000
//! pychat serve
//!
//! # Ask a one-off question with debug logging
//! pychat -vv ask what is a dictionary
//! ```
//!
use clap::Parser;
use pychat::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "pychat",
    about = "🐍 PyChat: a tiny chat tutor for Python concepts",
    long_about = "Serve the Python Learning Chat over HTTP, or ask it a question directly.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the HTTP tutor server.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Print the tutor's response to a single message.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the known topics and their explanations.
    Topics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Topics => commands::topics::handle_topics().await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
