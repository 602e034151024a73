//! Shared fixtures for integration tests.
#![allow(dead_code)]

use minitrackr::http::mutation::IssueForm;
use minitrackr::storage::SqliteStorage;

/// Fresh in-memory database with the schema applied.
pub fn test_db() -> SqliteStorage {
    SqliteStorage::open_memory().expect("in-memory database should open")
}

/// Build a form payload the way the HTML surfaces submit one.
pub fn form(title: Option<&str>, status: Option<&str>, priority: Option<&str>) -> IssueForm {
    IssueForm {
        title: title.map(str::to_string),
        status: status.map(str::to_string),
        priority: priority.map(str::to_string),
    }
}
