//! Template rendering.
//!
//! All templates are embedded in the binary and compiled into a single
//! `Tera` engine at startup. The engine is immutable for the process
//! lifetime and injected into handlers through `AppState`; there is no lazy
//! global.

use crate::error::Result;
use crate::model::Issue;
use tera::{Context, Tera};

/// Template names paired with their embedded sources.
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    ("backlog.html", include_str!("../../templates/backlog.html")),
    ("board.html", include_str!("../../templates/board.html")),
    (
        "backlog_row.html",
        include_str!("../../templates/backlog_row.html"),
    ),
    (
        "board_card.html",
        include_str!("../../templates/board_card.html"),
    ),
];

/// Build the template engine from the embedded sources.
///
/// # Errors
///
/// Returns an error if any embedded template fails to parse. That indicates
/// a build-time defect; `test_all_embedded_templates_render` covers it.
pub fn build_engine() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(EMBEDDED_TEMPLATES.to_vec())?;
    Ok(tera)
}

/// Render a single issue through the given fragment template.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn render_issue(engine: &Tera, template: &str, issue: &Issue) -> Result<String> {
    let mut context = Context::new();
    context.insert("issue", issue);
    Ok(engine.render(template, &context)?)
}

/// Wrap an already-rendered fragment in an htmx out-of-band relocation.
///
/// The wrapper instructs the client to append the fragment into the
/// container for the issue's new status group instead of swapping in place.
#[must_use]
pub fn wrap_oob(fragment: &str, wrapper_id: &str, target: &str) -> String {
    format!("<div id=\"{wrapper_id}\" hx-swap-oob=\"beforeend:{target}\">{fragment}</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};

    fn sample_issue() -> Issue {
        Issue {
            id: 3,
            title: "Write docs".to_string(),
            status: Status::Doing,
            priority: Priority::High,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_100,
        }
    }

    #[test]
    fn test_all_embedded_templates_render() {
        let engine = build_engine().expect("embedded templates should parse");
        let issue = sample_issue();

        for fragment in ["board_card.html", "backlog_row.html"] {
            let html = render_issue(&engine, fragment, &issue).unwrap();
            assert!(html.contains("Write docs"), "{fragment} missing title");
        }

        let mut context = Context::new();
        context.insert("issues", &vec![issue.clone()]);
        engine.render("backlog.html", &context).unwrap();

        let mut context = Context::new();
        context.insert("grouped", &crate::views::GroupedIssues::from_issues(vec![issue]));
        engine.render("board.html", &context).unwrap();
    }

    #[test]
    fn fragment_marks_current_status_selected() {
        let engine = build_engine().unwrap();
        let html = render_issue(&engine, "board_card.html", &sample_issue()).unwrap();
        assert!(html.contains("id=\"card-3\""));
        assert!(html.contains("value=\"doing\" selected"));
        assert!(!html.contains("value=\"todo\" selected"));
    }

    #[test]
    fn titles_are_escaped() {
        let engine = build_engine().unwrap();
        let mut issue = sample_issue();
        issue.title = "<script>alert(1)</script>".to_string();
        let html = render_issue(&engine, "backlog_row.html", &issue).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn oob_wrapper_targets_new_group() {
        let wrapped = wrap_oob("<div>x</div>", "card-9", "#column-done .board-issues");
        assert!(wrapped.starts_with("<div id=\"card-9\" hx-swap-oob="));
        assert!(wrapped.contains("beforeend:#column-done .board-issues"));
        assert!(wrapped.ends_with("<div>x</div></div>"));
    }
}
