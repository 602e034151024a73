//! View-model assembly for the two read surfaces.
//!
//! The backlog renders the flat capped list as-is; the board partitions the
//! same list into the three status columns. An issue whose persisted status
//! is outside the known set stays visible in the flat list but is dropped
//! from every board column. Both surfaces draw from one `list_issues` call,
//! so they cannot disagree about which records exist.

use crate::model::{Issue, Status};
use serde::Serialize;

/// Issues partitioned by status for the board view.
///
/// Relative recency order within each column matches the flat list.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct GroupedIssues {
    pub todo: Vec<Issue>,
    pub doing: Vec<Issue>,
    pub done: Vec<Issue>,
}

impl GroupedIssues {
    /// Partition a recency-ordered issue list into status columns.
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let mut grouped = Self::default();
        for issue in issues {
            match issue.status {
                Status::Todo => grouped.todo.push(issue),
                Status::Doing => grouped.doing.push(issue),
                Status::Done => grouped.done.push(issue),
                Status::Custom(_) => {} // not a board column
            }
        }
        grouped
    }

    /// Total issues across the three columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn issue(id: i64, status: Status) -> Issue {
        Issue {
            id,
            title: format!("issue-{id}"),
            status,
            priority: Priority::Medium,
            created_at: 1_700_000_000 + id,
            updated_at: 1_700_000_000 + id,
        }
    }

    #[test]
    fn partitions_by_status() {
        let grouped = GroupedIssues::from_issues(vec![
            issue(3, Status::Done),
            issue(2, Status::Doing),
            issue(1, Status::Todo),
        ]);
        assert_eq!(grouped.todo.len(), 1);
        assert_eq!(grouped.doing.len(), 1);
        assert_eq!(grouped.done.len(), 1);
        assert_eq!(grouped.len(), 3);
    }

    #[test]
    fn preserves_relative_order_within_column() {
        let grouped = GroupedIssues::from_issues(vec![
            issue(5, Status::Todo),
            issue(4, Status::Doing),
            issue(3, Status::Todo),
            issue(1, Status::Todo),
        ]);
        let ids: Vec<i64> = grouped.todo.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn unknown_status_is_dropped_from_board() {
        let grouped = GroupedIssues::from_issues(vec![
            issue(2, Status::Custom("archived".to_string())),
            issue(1, Status::Todo),
        ]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped.doing.is_empty());
        assert!(grouped.done.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_board() {
        let grouped = GroupedIssues::from_issues(vec![]);
        assert!(grouped.is_empty());
    }
}
