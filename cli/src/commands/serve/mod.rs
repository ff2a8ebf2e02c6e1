//! # PyChat Tutor Server
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! `pychat serve` runs the chat tutor over HTTP:
//! - `GET /` usage banner
//! - `GET /chat?message=...` classify a message and record it
//! - `GET /history?limit=...` recent chat entries
//! - `GET /learn?topic=...` explanation for one topic
//!
//! ## Architecture
//!
//! - `config.rs`: Argument parsing and configuration file merging
//! - `handlers.rs`: Shared state, typed query parameters and route handlers
//! - `server_logic.rs`: Middleware, port selection and the serve loop
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default 127.0.0.1:5000
//! pychat serve
//!
//! # Custom port, CORS off, five entries per /history page
//! pychat serve --port 8080 --no-cors --history-limit 5
//! ```
//!
use crate::core::error::Result;
use crate::tutor::{HistoryStore, RandomPicker, Tutor};
use tracing::info;

pub use config::ServeArgs;
pub use handlers::{build_router, AppState};

/// Configuration loading and merging for the tutor server.
pub mod config;

/// Route handlers and the state they share.
pub mod handlers;

/// The Axum server loop, middleware and port selection.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Loads the effective configuration, creates a fresh tutor and an empty
/// history store, and runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(&args)?;
    info!("Effective server config: {:?}", config);

    let state = AppState::new(
        Tutor::new(RandomPicker),
        HistoryStore::new(),
        config.history_limit,
    );
    server_logic::run_server(config, state).await?;

    Ok(())
}
