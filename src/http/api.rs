//! JSON read surface.

use super::{recover, AppState};
use crate::error::TrackrError;
use crate::model::Issue;
use axum::extract::{Path, State};
use axum::Json;

/// `GET /api/issues` - the most recent 1000 issues, newest first.
pub async fn list_issues(
    State(state): State<AppState>,
) -> Result<Json<Vec<Issue>>, TrackrError> {
    recover(|| {
        let issues = state.lock_storage()?.list_issues()?;
        Ok(Json(issues))
    })
}

/// `GET /api/issues/:id` - one issue, or 404 if the id is unknown.
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Issue>, TrackrError> {
    recover(|| {
        let issue = state
            .lock_storage()?
            .get_issue(id)?
            .ok_or(TrackrError::NotFound { id })?;
        Ok(Json(issue))
    })
}
