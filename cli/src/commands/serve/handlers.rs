//! # PyChat HTTP Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! Request handlers for the four tutor endpoints and the shared state they
//! run against. Query strings are deserialized into typed parameter structs;
//! only `/history` can reject one, answering `limit=abc` with
//! `400 Bad Request` and a JSON error body. `/chat` and `/learn` always
//! answer: a repeated key uses its first value and a missing one means `""`.
//!
//! | Route      | Parameters            | Response                          |
//! |------------|-----------------------|-----------------------------------|
//! | `/`        | none                  | plain-text usage banner           |
//! | `/chat`    | `message` (default "")| the stored `ChatEntry`            |
//! | `/history` | `limit` (int)         | array of recent `ChatEntry`       |
//! | `/learn`   | `topic` (default "")  | `Lesson` (found or not found)     |
//!
use crate::tutor::{ChatEntry, HistoryStore, Lesson, Tutor};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Body of `GET /`.
pub const BANNER: &str = "
    Welcome to the Python Learning Chat!
    Available endpoints:
    - /chat?message=your_message
    - /history
    - /learn?topic=python_concept
    ";

/// Everything a handler needs, cloned per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tutor: Tutor,
    pub history: HistoryStore,
    /// `limit` used by `/history` when the query has none.
    pub history_limit: i64,
}

impl AppState {
    pub fn new(tutor: Tutor, history: HistoryStore, history_limit: i64) -> Self {
        Self {
            tutor,
            history,
            history_limit,
        }
    }
}

/// Query string as raw pairs, in order. Unlike a struct, this accepts a
/// key given more than once.
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatParams {
    pub message: String,
}

impl ChatParams {
    /// First `message` value, or `""`. Never fails.
    pub fn from_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Self {
        Self {
            message: first_value(query, "message"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LearnParams {
    pub topic: String,
}

impl LearnParams {
    /// First `topic` value, or `""`. Never fails.
    pub fn from_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Self {
        Self {
            topic: first_value(query, "topic"),
        }
    }
}

fn first_value(query: Result<Query<QueryPairs>, QueryRejection>, key: &str) -> String {
    match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
            .unwrap_or_default(),
        Err(rejection) => {
            warn!(
                "Unreadable query string, using default {}: {}",
                key,
                rejection.body_text()
            );
            String::new()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Routes without middleware. `server_logic::create_app` adds tracing and CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", get(chat))
        .route("/history", get(history))
        .route("/learn", get(learn))
        .with_state(state)
}

async fn index() -> &'static str {
    BANNER
}

async fn chat(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Json<ChatEntry> {
    let params = ChatParams::from_query(query);

    let message = params.message.to_lowercase();
    let response = state.tutor.classify(&message);
    let entry = ChatEntry::now(message, response);
    let count = state.history.append(entry.clone());
    debug!(
        "Chat entry #{} stored: {:?} -> {:?}",
        count, entry.message, entry.response
    );

    Json(entry)
}

async fn history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query_response(rejection),
    };

    let limit = params.limit.unwrap_or(state.history_limit);
    Json(state.history.recent(limit)).into_response()
}

async fn learn(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Json<Lesson> {
    let params = LearnParams::from_query(query);

    let lesson = state.tutor.lookup(&params.topic);
    if matches!(lesson, Lesson::NotFound { .. }) {
        info!("Unknown topic requested: {:?}", params.topic);
    }
    Json(lesson)
}

fn bad_query_response(rejection: QueryRejection) -> Response {
    warn!("Rejected query string: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: ErrorBody {
                code: "invalid_query".to_string(),
                message: rejection.body_text(),
            },
        }),
    )
        .into_response()
}
