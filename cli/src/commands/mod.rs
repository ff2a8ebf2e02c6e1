//! # PyChat Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! One module per top-level `pychat` subcommand:
//! - `serve`: Run the chat tutor HTTP server
//! - `ask`: Classify a single message from the command line
//! - `topics`: List the topic dictionary
//!
//! `main.rs` parses the arguments with Clap and calls the matching
//! `handle_*` function, which returns `Result<()>`.
//!
pub mod ask;
pub mod serve;
pub mod topics;
