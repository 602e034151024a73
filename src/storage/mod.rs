//! Issue persistence.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStorage, LIST_CAP};
