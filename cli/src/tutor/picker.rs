//! # Example Picker
//!
//! File: cli/src/tutor/picker.rs
//! Author: PyChat Maintainers
//!
//! Source of randomness for the "example" branch of the classifier. The
//! tutor only ever asks for an index into a slice, which keeps tests
//! deterministic: swap in `FixedPicker` and the chosen snippet is known.

use rand::Rng;

/// Chooses an index in `0..len`. `len` is always non-zero.
pub trait ExamplePicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ExamplePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always returns the same index, wrapped into range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ExamplePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}
