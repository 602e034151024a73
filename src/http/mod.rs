//! HTTP surface: shared state, routing, and the request recovery boundary.

pub mod api;
pub mod mutation;
pub mod pages;

use crate::error::{Result, TrackrError};
use crate::storage::SqliteStorage;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard};
use tera::Tera;

/// Shared application dependencies.
///
/// The store sits behind a mutex: one logical writer, all store operations
/// serialized at this boundary. The template engine is built once at startup
/// and read-only thereafter.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<Mutex<SqliteStorage>>,
    pub engine: Arc<Tera>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: SqliteStorage, engine: Tera) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
            engine: Arc::new(engine),
        }
    }

    /// Acquire the serialized store handle.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn lock_storage(&self) -> Result<MutexGuard<'_, SqliteStorage>> {
        self.storage
            .lock()
            .map_err(|_| TrackrError::Internal("storage lock poisoned".to_string()))
    }
}

/// Build the application router.
///
/// Collection routes spell out their rejected verbs the way the original
/// router's method switches did; id routes use method routers and leave the
/// rest to axum's 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        // UI routes
        .route("/", get(pages::backlog_page))
        .route("/backlog", get(pages::backlog_page))
        .route("/board", get(pages::board_page))
        // API read surface
        .route("/health", get(health))
        .route(
            "/api/issues",
            get(api::list_issues)
                .post(method_not_allowed)
                .put(method_not_allowed)
                .delete(method_not_allowed),
        )
        .route(
            "/api/issues/:id",
            get(api::get_issue)
                .post(method_not_allowed)
                .put(method_not_allowed)
                .delete(method_not_allowed),
        )
        // Board fragment routes
        .route("/board/issues", post(mutation::board_create))
        .route(
            "/board/issues/:id",
            put(mutation::board_update)
                .patch(mutation::board_update)
                .delete(mutation::board_delete),
        )
        // Backlog fragment routes
        .route("/backlog/issues", post(mutation::backlog_create))
        .route(
            "/backlog/issues/:id",
            put(mutation::backlog_update)
                .patch(mutation::backlog_update)
                .delete(mutation::backlog_delete),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn method_not_allowed(method: Method) -> TrackrError {
    TrackrError::Method {
        method: method.to_string(),
    }
}

/// Run a handler body behind a panic recovery boundary.
///
/// A panic becomes a logged internal error for that request; the process
/// keeps serving.
pub(crate) fn recover<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => Err(TrackrError::Internal(
            "panic while handling request".to_string(),
        )),
    }
}

impl IntoResponse for TrackrError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Method { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) | Self::Template(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            (status, "Internal server error".to_string()).into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}
