//! Database schema definition and connection tuning.

use rusqlite::{Connection, Result};

/// The complete SQL schema for the issues database.
pub const SCHEMA_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS issues (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'todo',
        priority TEXT NOT NULL DEFAULT 'medium',
        created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
        updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
    );

    CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
    CREATE INDEX IF NOT EXISTS idx_issues_created_at ON issues(created_at DESC);
";

/// Apply the schema and connection pragmas.
///
/// Idempotent: all DDL statements use `IF NOT EXISTS`. Pragmas keep the
/// memory footprint bounded on small deployments: WAL journaling, a 2MB page
/// cache, no mmap, and in-memory temp store.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "cache_size", -2000)?;
    conn.pragma_update(None, "mmap_size", 0)?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;

    Ok(())
}
