//! Mutation handling shared by the board and backlog surfaces.
//!
//! Both surfaces run the same validate → read-current → merge → persist →
//! re-fetch → render pipeline over the same store; a [`Surface`] value
//! supplies the presentation differences (fragment template, element id
//! prefix, out-of-band relocation target). The store-facing core functions
//! are free of HTTP types so tests can exercise the merge and relocation
//! semantics directly.

use super::{recover, AppState};
use crate::error::{Result, TrackrError};
use crate::model::{Issue, Priority, Status};
use crate::render::{render_issue, wrap_oob};
use crate::storage::SqliteStorage;
use crate::validation::{validate_priority, validate_status, validate_title};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tera::Tera;

/// Which UI the mutation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Board,
    Backlog,
}

impl Surface {
    const fn fragment_template(self) -> &'static str {
        match self {
            Self::Board => "board_card.html",
            Self::Backlog => "backlog_row.html",
        }
    }

    fn wrapper_id(self, id: i64) -> String {
        match self {
            Self::Board => format!("card-{id}"),
            Self::Backlog => format!("row-{id}"),
        }
    }

    /// Container selector for the group an issue lands in after a status
    /// change. The backlog is a single flat list, so every status maps to
    /// the same container there.
    fn oob_target(self, status: &Status) -> String {
        match self {
            Self::Board => format!("#column-{} .board-issues", status.as_str()),
            Self::Backlog => "#backlog-issues".to_string(),
        }
    }
}

/// Form payload for create and update. Every field is optional at the wire
/// level; create requires `title`, update treats empty/absent as "keep
/// current".
#[derive(Debug, Default, Deserialize)]
pub struct IssueForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Validate a create request and persist the new issue.
///
/// `status` defaults to `todo` and `priority` to `medium` when absent or
/// empty; a non-empty value must pass its validator or the whole request is
/// rejected before the store is touched.
///
/// # Errors
///
/// Returns a validation error for a bad field, or a database error from the
/// insert.
pub fn create_issue(storage: &mut SqliteStorage, form: &IssueForm) -> Result<Issue> {
    let title = validate_title(form.title.as_deref().unwrap_or(""))?;
    let status = match non_empty(form.status.as_ref()) {
        Some(value) => validate_status(value)?,
        None => Status::default(),
    };
    let priority = match non_empty(form.priority.as_ref()) {
        Some(value) => validate_priority(value)?,
        None => Priority::default(),
    };

    storage.create_issue(&title, &status, &priority)
}

/// Result of a partial-merge update.
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The canonical record re-fetched after the write.
    pub issue: Issue,
    /// Set iff the update moved the issue to a different status; carries the
    /// new status so the response can relocate the record into its group.
    pub relocated: Option<Status>,
}

/// Apply a partial-merge update: absent/empty fields keep the current
/// persisted value, present fields are validated before anything is written.
/// All-or-nothing; no partial write survives a rejected field.
///
/// # Errors
///
/// Returns `NotFound` when the id does not resolve (checked before any side
/// effect), a validation error for a bad field, or a database error.
pub fn apply_update(storage: &mut SqliteStorage, id: i64, form: &IssueForm) -> Result<UpdateOutcome> {
    let current = storage
        .get_issue(id)?
        .ok_or(TrackrError::NotFound { id })?;

    let title = match non_empty(form.title.as_ref()) {
        Some(value) => validate_title(value)?,
        None => current.title.clone(),
    };
    let status = match non_empty(form.status.as_ref()) {
        Some(value) => validate_status(value)?,
        None => current.status.clone(),
    };
    let priority = match non_empty(form.priority.as_ref()) {
        Some(value) => validate_priority(value)?,
        None => current.priority.clone(),
    };

    storage.update_issue(id, &title, &status, &priority)?;

    let issue = storage
        .get_issue(id)?
        .ok_or(TrackrError::NotFound { id })?;
    let relocated = (issue.status != current.status).then(|| issue.status.clone());

    Ok(UpdateOutcome { issue, relocated })
}

fn render_created(engine: &Tera, surface: Surface, issue: &Issue) -> Result<Html<String>> {
    Ok(Html(render_issue(
        engine,
        surface.fragment_template(),
        issue,
    )?))
}

fn render_updated(engine: &Tera, surface: Surface, outcome: &UpdateOutcome) -> Result<Html<String>> {
    let fragment = render_issue(engine, surface.fragment_template(), &outcome.issue)?;
    match &outcome.relocated {
        // Status changed: instruct the client to move the record into the
        // container for its new group instead of swapping in place.
        Some(status) => Ok(Html(wrap_oob(
            &fragment,
            &surface.wrapper_id(outcome.issue.id),
            &surface.oob_target(status),
        ))),
        None => Ok(Html(fragment)),
    }
}

fn handle_create(
    state: &AppState,
    surface: Surface,
    form: &IssueForm,
) -> Result<Html<String>> {
    recover(|| {
        let issue = create_issue(&mut *state.lock_storage()?, form)?;
        tracing::info!(id = issue.id, surface = ?surface, "issue created");
        render_created(&state.engine, surface, &issue)
    })
}

fn handle_update(
    state: &AppState,
    surface: Surface,
    id: i64,
    form: &IssueForm,
) -> Result<Html<String>> {
    recover(|| {
        let outcome = apply_update(&mut *state.lock_storage()?, id, form)?;
        tracing::info!(
            id,
            relocated = outcome.relocated.is_some(),
            surface = ?surface,
            "issue updated"
        );
        render_updated(&state.engine, surface, &outcome)
    })
}

fn handle_delete(state: &AppState, id: i64) -> Result<StatusCode> {
    recover(|| {
        state.lock_storage()?.delete_issue(id)?;
        tracing::info!(id, "issue deleted");
        Ok(StatusCode::OK)
    })
}

// Board surface

pub async fn board_create(
    State(state): State<AppState>,
    Form(form): Form<IssueForm>,
) -> Result<Html<String>> {
    handle_create(&state, Surface::Board, &form)
}

pub async fn board_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<IssueForm>,
) -> Result<Html<String>> {
    handle_update(&state, Surface::Board, id, &form)
}

pub async fn board_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    handle_delete(&state, id)
}

// Backlog surface

pub async fn backlog_create(
    State(state): State<AppState>,
    Form(form): Form<IssueForm>,
) -> Result<Html<String>> {
    handle_create(&state, Surface::Backlog, &form)
}

pub async fn backlog_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<IssueForm>,
) -> Result<Html<String>> {
    handle_update(&state, Surface::Backlog, id, &form)
}

pub async fn backlog_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    handle_delete(&state, id)
}
