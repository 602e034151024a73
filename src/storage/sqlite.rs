//! `SQLite` storage implementation.

use crate::error::Result;
use crate::model::{Issue, Priority, Status};
use crate::storage::schema::apply_schema;
use chrono::Utc;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Listing cap: older records become invisible to `list_issues`, not deleted.
pub const LIST_CAP: u32 = 1000;

/// SQLite-based issue store.
///
/// One connection, one logical writer. Callers serialize access (the HTTP
/// layer holds this behind a mutex), so no operation here takes its own
/// transaction. The read-then-merge-then-write pattern used by update
/// handlers is therefore not atomic against a concurrent updater on another
/// connection; that race is tolerated, not resolved.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (creating if necessary) the database at the given path.
    ///
    /// Parent directories are created first, matching the original
    /// deployment layout of a `./data/` subdirectory.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created, the connection
    /// cannot be established, or schema application fails.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create a new issue, stamping `created_at = updated_at = now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_issue(&mut self, title: &str, status: &Status, priority: &Priority) -> Result<Issue> {
        let now = Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO issues (title, status, priority, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            rusqlite::params![title, status.as_str(), priority.as_str(), now, now],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(Issue {
            id,
            title: title.to_string(),
            status: status.clone(),
            priority: priority.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get an issue by id. A missing row is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_issue(&self, id: i64) -> Result<Option<Issue>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, status, priority, created_at, updated_at
             FROM issues WHERE id = ?",
        )?;
        let result = stmt.query_row([id], issue_from_row);

        match result {
            Ok(issue) => Ok(Some(issue)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List the most recent issues, newest first, capped at [`LIST_CAP`].
    ///
    /// The secondary `id DESC` sort keeps issues created within the same
    /// second in recency order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, status, priority, created_at, updated_at
             FROM issues ORDER BY created_at DESC, id DESC LIMIT ?",
        )?;
        let issues = stmt
            .query_map([LIST_CAP], issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(issues)
    }

    /// Overwrite the three mutable fields and refresh `updated_at`.
    ///
    /// Performs no existence check; updating a missing id affects zero rows.
    /// Callers resolve the id via [`Self::get_issue`] first and merge
    /// unspecified fields from the current record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update statement fails.
    pub fn update_issue(
        &mut self,
        id: i64,
        title: &str,
        status: &Status,
        priority: &Priority,
    ) -> Result<()> {
        let now = Utc::now().timestamp();
        self.conn.execute(
            "UPDATE issues SET title = ?, status = ?, priority = ?, updated_at = ? WHERE id = ?",
            rusqlite::params![title, status.as_str(), priority.as_str(), now, id],
        )?;
        Ok(())
    }

    /// Delete an issue. Deleting a missing id is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub fn delete_issue(&mut self, id: i64) -> Result<()> {
        self.conn.execute("DELETE FROM issues WHERE id = ?", [id])?;
        Ok(())
    }
}

fn issue_from_row(row: &rusqlite::Row) -> rusqlite::Result<Issue> {
    Ok(Issue {
        id: row.get(0)?,
        title: row.get(1)?,
        status: Status::from_db(row.get(2)?),
        priority: Priority::from_db(row.get(3)?),
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
