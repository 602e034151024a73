//! Full-page server-rendered views.

use super::{recover, AppState};
use crate::error::TrackrError;
use crate::views::GroupedIssues;
use axum::extract::State;
use axum::response::Html;
use tera::Context;

/// `GET /` and `GET /backlog` - the flat, most-recent-first list.
pub async fn backlog_page(State(state): State<AppState>) -> Result<Html<String>, TrackrError> {
    recover(|| {
        let issues = state.lock_storage()?.list_issues()?;
        let mut context = Context::new();
        context.insert("issues", &issues);
        Ok(Html(state.engine.render("backlog.html", &context)?))
    })
}

/// `GET /board` - the same list partitioned into status columns.
pub async fn board_page(State(state): State<AppState>) -> Result<Html<String>, TrackrError> {
    recover(|| {
        let issues = state.lock_storage()?.list_issues()?;
        let grouped = GroupedIssues::from_issues(issues);
        let mut context = Context::new();
        context.insert("grouped", &grouped);
        Ok(Html(state.engine.render("board.html", &context)?))
    })
}
