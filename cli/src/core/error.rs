//! # PyChat Error Types
//!
//! File: cli/src/core/error.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! This module defines the error types used throughout PyChat. The tutor
//! itself never fails (every message gets a response, unknown topics are a
//! regular payload), so the errors here cover the outer shell: loading the
//! server configuration, binding a listener and running the HTTP server.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PychatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if !path.is_file() {
//!     return Err(PychatError::Config(format!("Config file not found: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use std::net::IpAddr;
use thiserror::Error;

/// Custom error type for the PyChat application.
#[derive(Error, Debug)]
pub enum PychatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No free port on {host} in {start}..{end}")]
    NoFreePort { host: IpAddr, start: u16, end: u32 },

    #[error("HTTP server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
