//! # PyChat Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: a handle on the compiled
//! `pychat` binary, and a small driver for sending requests to the router
//! in-process.
//!

// Each test file uses a different subset of these helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pychat::commands::serve::AppState;
use pychat::tutor::{FixedPicker, HistoryStore, Tutor};
use serde_json::Value;
use tower::ServiceExt;

/// # Get PyChat Command (`pychat_cmd`)
///
/// An `assert_cmd::Command` for the `pychat` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn pychat_cmd() -> Command {
    Command::cargo_bin("pychat").expect("Failed to find pychat binary for testing")
}

/// State with a deterministic example picker and an empty history.
pub fn test_state(example_index: usize) -> AppState {
    AppState::new(Tutor::new(FixedPicker(example_index)), HistoryStore::new(), 10)
}

/// Sends `GET uri` to the router and returns the status and raw body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (
        status,
        String::from_utf8(body.to_vec()).expect("body should be utf-8"),
    )
}

/// Like `get`, but parses the body as JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let value = serde_json::from_str(&body).expect("body should be JSON");
    (status, value)
}
