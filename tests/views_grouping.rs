//! Board/backlog view assembly over real storage: grouped-view completeness
//! and the flat/grouped asymmetry for out-of-set statuses.

mod common;

use common::test_db;
use minitrackr::model::{Priority, Status};
use minitrackr::views::GroupedIssues;

#[test]
fn grouped_total_equals_known_status_count() {
    let mut storage = test_db();
    for (title, status) in [
        ("a", "todo"),
        ("b", "doing"),
        ("c", "done"),
        ("d", "todo"),
        ("e", "archived"),
    ] {
        storage
            .create_issue(title, &Status::from_db(status.to_string()), &Priority::Medium)
            .unwrap();
    }

    let flat = storage.list_issues().unwrap();
    assert_eq!(flat.len(), 5);

    let known = flat.iter().filter(|i| i.status.is_known()).count();
    let grouped = GroupedIssues::from_issues(flat.clone());
    assert_eq!(grouped.len(), known);
    assert_eq!(grouped.len(), 4);

    // The archived issue is in the flat view but in none of the buckets.
    assert!(flat.iter().any(|i| i.title == "e"));
    for bucket in [&grouped.todo, &grouped.doing, &grouped.done] {
        assert!(bucket.iter().all(|i| i.title != "e"));
    }
}

#[test]
fn grouped_buckets_keep_flat_recency_order() {
    let mut storage = test_db();
    for title in ["first", "second", "third"] {
        storage
            .create_issue(title, &Status::Todo, &Priority::Medium)
            .unwrap();
    }

    let grouped = GroupedIssues::from_issues(storage.list_issues().unwrap());
    let titles: Vec<&str> = grouped.todo.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[test]
fn both_views_draw_from_the_same_records() {
    let mut storage = test_db();
    storage
        .create_issue("shared", &Status::Doing, &Priority::High)
        .unwrap();

    let flat = storage.list_issues().unwrap();
    let grouped = GroupedIssues::from_issues(flat.clone());
    assert_eq!(grouped.doing, flat);
}
