//! # PyChat Tutor
//!
//! File: cli/src/tutor/mod.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! The domain side of PyChat, independent of HTTP:
//! - `topics`: The fixed topic dictionary and example snippets
//! - `classifier`: The `Tutor`, which turns a message into a response and
//!   answers topic lookups
//! - `picker`: The `ExamplePicker` trait behind the random example choice
//! - `history`: The shared, append-only `HistoryStore` of chat entries
//!
pub mod classifier;
pub mod history;
pub mod picker;
pub mod topics;

pub use classifier::{Lesson, Tutor};
pub use history::{ChatEntry, HistoryStore};
pub use picker::{ExamplePicker, FixedPicker, RandomPicker};
