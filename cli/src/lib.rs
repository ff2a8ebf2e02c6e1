//! # PyChat Library
//!
//! File: cli/src/lib.rs
//! Author: PyChat Maintainers
//!
//! A small chat tutor for Python concepts. The library holds everything the
//! `pychat` binary runs, so integration tests in `tests/` can drive the
//! tutor and the HTTP router directly:
//!
//! - `tutor`: Message classifier, topic dictionary and history store
//! - `commands`: Subcommand handlers, including the HTTP server
//! - `core`: Error types
//!
pub mod commands;
pub mod core;
pub mod tutor;
