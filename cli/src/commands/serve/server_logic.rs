//! # PyChat HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! Runs the tutor endpoints on an Axum server:
//! - Port availability checking with automatic fallback
//! - Request tracing and optional CORS middleware
//! - Graceful shutdown on Ctrl+C or SIGTERM
//!
//! ## Architecture
//!
//! 1. Find a free port, starting at the configured one
//! 2. Build the router from `handlers::build_router` and wrap it in middleware
//! 3. Serve until a shutdown signal arrives
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::core::error::{PychatError, Result};
use anyhow::Context;
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Number of consecutive ports tried before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `config.port`, prints where the
/// tutor is reachable and serves `state` until shutdown.
///
/// ## Errors
///
/// - No free port within `MAX_PORT_ATTEMPTS` ports.
/// - The listener cannot be bound.
/// - The Axum server fails while running.
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    let listener = bind_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound listener address")?;

    let app = create_app(state, &config);

    println!("\n=================================================================");
    println!("🐍 Python Learning Chat");
    println!("🌐 Local URL:         http://{}", addr);
    println!("💬 Try:               http://{}/chat?message=tell+me+about+lists", addr);
    println!("📜 History limit:     {}", config.history_limit);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting tutor server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PychatError::Server(e.to_string()))?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Tries `start_port`, `start_port + 1`, ... up to `max_attempts` ports and
/// returns the first listener that binds. The listener is handed straight to
/// the server, so the port cannot be taken in between.
async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    for attempt in 0..max_attempts {
        let Some(port) = start_port.checked_add(u16::from(attempt)) else {
            break;
        };
        let addr = SocketAddr::new(host, port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to port {} instead.",
                        start_port, port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    port,
                    host,
                    e
                );
            }
        }
    }

    Err(PychatError::NoFreePort {
        host,
        start: start_port,
        end: u32::from(start_port) + u32::from(max_attempts),
    }
    .into())
}

/// # Create Axum Application (`create_app`)
///
/// Wraps the tutor routes in request tracing and, when enabled, permissive
/// CORS.
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    handlers::build_router(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(cors_layer),
    )
}
