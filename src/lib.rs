//! `minitrackr` - a minimal issue-tracking web application.
//!
//! Issues (title, status, priority, timestamps) live in an embedded SQLite
//! database and are exposed through a JSON API and two server-rendered HTML
//! surfaces: a flat backlog list and a three-column status board, both
//! updated through htmx fragments. The two surfaces share one mutation core
//! and one store, so they cannot desynchronize.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod render;
pub mod storage;
pub mod validation;
pub mod views;

pub use error::{Result, TrackrError};
