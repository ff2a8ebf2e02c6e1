//! # PyChat Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! This module handles configuration loading and merging for the tutor
//! server. Settings come from, in order of precedence:
//! 1. Command-line arguments (highest priority)
//! 2. A TOML configuration file: `--config <PATH>`, or `.pychat.toml` in the
//!    current directory if present
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 5000
//! enable_cors = true
//! history_limit = 10
//! ```
//!
//! Loading and merging configuration:
//!
//! ```rust,ignore
//! let config = load_and_merge_config(&args)?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::error::{PychatError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".pychat.toml";

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `pychat serve`. Every setting is
/// optional so an explicit flag can be told apart from a default and always
/// wins over the configuration file.
#[derive(Parser, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Address to bind to. Defaults to `127.0.0.1`.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on. Defaults to `5000`. If the port is taken, the next
    /// free one is used.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Number of entries `/history` returns when no `limit` is given.
    #[arg(long, allow_negative_numbers = true)]
    pub history_limit: Option<i64>,

    /// Path to a TOML config file. Without it, `.pychat.toml` in the current
    /// directory is used when present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The consolidated settings the server runs with after merging defaults,
/// the configuration file and command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The network IP address the server binds to.
    pub host: IpAddr,

    /// The port the server tries first.
    pub port: u16,

    /// Whether permissive CORS headers are sent.
    pub enable_cors: bool,

    /// Default `limit` for `GET /history`.
    pub history_limit: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            enable_cors: true,
            history_limit: 10,
        }
    }
}

/// Raw contents of a configuration file. All fields are optional so a file
/// only needs to mention what it overrides.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
    pub history_limit: Option<i64>,
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Resolves the configuration file (explicit `--config` path, or
/// `.pychat.toml` in the current directory), then layers the command-line
/// arguments on top.
///
/// ## Errors
///
/// Returns an error if:
/// - `--config` names a file that does not exist.
/// - The configuration file cannot be read or is not valid TOML, or contains
///   unknown keys.
/// - The current working directory cannot be determined.
pub fn load_and_merge_config(args: &ServeArgs) -> Result<ServerConfig> {
    let file_config = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(PychatError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )))?;
            }
            Some(load_config_file(path)?)
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            let default_path = cwd.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                Some(load_config_file(&default_path)?)
            } else {
                debug!("No config file found at {}", default_path.display());
                None
            }
        }
    };

    let config = merge(file_config.unwrap_or_default(), args);
    debug!("Merged server configuration: {:?}", config);
    Ok(config)
}

/// Reads and parses a single TOML configuration file.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    info!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_config(content: &str) -> Result<FileConfig> {
    toml::from_str(content).map_err(|e| PychatError::Config(e.message().to_string()).into())
}

/// Applies file values over the defaults, then explicit arguments over both.
fn merge(file: FileConfig, args: &ServeArgs) -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: args.host.or(file.host).unwrap_or(defaults.host),
        port: args.port.or(file.port).unwrap_or(defaults.port),
        // `--no-cors` can only switch CORS off; otherwise the file decides.
        enable_cors: !args.no_cors && file.enable_cors.unwrap_or(defaults.enable_cors),
        history_limit: args
            .history_limit
            .or(file.history_limit)
            .unwrap_or(defaults.history_limit),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = merge(FileConfig::default(), &ServeArgs::default());
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_file_values_override_defaults() -> Result<()> {
        let file = parse_config("port = 8080\nenable_cors = false\nhistory_limit = 3\n")?;
        let config = merge(file, &ServeArgs::default());
        assert_eq!(config.port, 8080);
        assert!(!config.enable_cors);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        Ok(())
    }

    #[test]
    fn test_cli_flags_override_file() -> Result<()> {
        let file = parse_config("host = \"0.0.0.0\"\nport = 8080\n")?;
        let args = ServeArgs {
            port: Some(9000),
            no_cors: true,
            ..Default::default()
        };
        let config = merge(file, &args);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(!config.enable_cors);
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse_config("colour = \"blue\"\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PychatError>(),
            Some(PychatError::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_config_path() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("tutor.toml");
        fs::write(&path, "port = 6123\n")?;

        let args = ServeArgs {
            config: Some(path),
            ..Default::default()
        };
        let config = load_and_merge_config(&args)?;
        assert_eq!(config.port, 6123);
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config_path_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let args = ServeArgs {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };
        let err = load_and_merge_config(&args).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
        Ok(())
    }
}
