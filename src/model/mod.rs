//! Core data types for `minitrackr`.
//!
//! This module defines the types shared by the store, the JSON API, and the
//! HTML view layer:
//! - `Issue` - The tracked work item
//! - `Status` - Board columns (todo / doing / done)
//! - `Priority` - Low / medium / high

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue workflow status.
///
/// The known set is closed and case-sensitive. `Custom` exists so that rows
/// written outside this application (or by older schemas) can still be read
/// and listed; validators never accept it and the board view drops it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Doing,
    Done,
    #[serde(untagged)]
    Custom(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
            Self::Custom(value) => value,
        }
    }

    /// Whether this is one of the three board columns.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Todo | Self::Doing | Self::Done)
    }

    /// Lenient conversion for values read back from storage.
    ///
    /// Unknown values are preserved as `Custom` rather than rejected, so the
    /// flat list can still show rows another tool wrote.
    #[must_use]
    pub fn from_db(value: String) -> Self {
        match value.as_str() {
            "todo" => Self::Todo,
            "doing" => Self::Doing,
            "done" => Self::Done,
            _ => Self::Custom(value),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::TrackrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(crate::error::TrackrError::validation(
                "status",
                format!("invalid status '{other}' (expected todo, doing, done)"),
            )),
        }
    }
}

/// Issue priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(untagged)]
    Custom(String),
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Custom(value) => value,
        }
    }

    /// Lenient conversion for values read back from storage.
    #[must_use]
    pub fn from_db(value: String) -> Self {
        match value.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Custom(value),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::error::TrackrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(crate::error::TrackrError::validation(
                "priority",
                format!("invalid priority '{other}' (expected low, medium, high)"),
            )),
        }
    }
}

/// The tracked issue record.
///
/// Timestamps are epoch seconds. `id` is assigned by the store and immutable;
/// `created_at` is set once; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub id: i64,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(serde_json::to_string(&Status::Doing).unwrap(), "\"doing\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn status_custom_roundtrip() {
        let status: Status = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, Status::Custom("archived".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"archived\"");
    }

    #[test]
    fn status_from_str_is_case_sensitive() {
        assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
        assert!("Todo".parse::<Status>().is_err());
        assert!("TODO".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn status_from_db_preserves_unknown() {
        assert_eq!(Status::from_db("done".to_string()), Status::Done);
        let custom = Status::from_db("archived".to_string());
        assert_eq!(custom.as_str(), "archived");
        assert!(!custom.is_known());
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn issue_serialization_shape() {
        let issue = Issue {
            id: 7,
            title: "Fix bug".to_string(),
            status: Status::Todo,
            priority: Priority::Medium,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"status\":\"todo\""));
        assert!(json.contains("\"priority\":\"medium\""));
        assert!(json.contains("\"created_at\":1700000000"));
    }
}
