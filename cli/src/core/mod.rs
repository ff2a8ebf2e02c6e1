//! # PyChat Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! Shared infrastructure used by the tutor and the command handlers. For now
//! this is the error module: the `PychatError` enum and the crate-wide
//! `Result` alias.
//!
//! ```rust,ignore
//! use crate::core::error::{PychatError, Result};
//! ```
//!
pub mod error;
