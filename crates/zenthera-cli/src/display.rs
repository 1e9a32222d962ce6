//! Plain-text rendering for the terminal front end.
//!
//! Each `render_*` function returns the text for one screen so the output can
//! be checked without capturing stdout.

use zenthera_core::portfolio::{CategoryFilter, EMPTY_STATE_MESSAGE, FILTER_LABELS};
use zenthera_core::{Draft, NAV_ITEMS, Navigator, Project, Route, ServiceTag};
use zenthera_rfp::Confirmation;

const MAX_SUMMARY_CHARS: usize = 72;

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

// ── Navigation ──

pub fn render_nav(nav: &Navigator) -> String {
    let mut out = String::new();
    for item in NAV_ITEMS {
        let marker = if nav.is_active(item) { "*" } else { " " };
        let label = if item.is_button {
            format!("[ {} ]", item.label)
        } else {
            item.label.to_string()
        };
        line(
            &mut out,
            &format!(
                "{marker} {:<16} {:<12} {}",
                label,
                item.route.path(),
                item.route.title()
            ),
        );
    }
    out
}

// ── Portfolio ──

/// Portfolio grid under the filter bar. Zero matches render the empty-state
/// message rather than an empty grid.
pub fn render_portfolio(projects: &[&Project], filter: &CategoryFilter) -> String {
    let mut out = String::new();
    let bar: Vec<String> = FILTER_LABELS
        .iter()
        .map(|label| {
            if CategoryFilter::parse(label) == *filter {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    line(&mut out, &bar.join("  "));
    out.push('\n');

    if projects.is_empty() {
        line(&mut out, EMPTY_STATE_MESSAGE);
        return out;
    }
    for p in projects {
        line(
            &mut out,
            &format!(
                "  {:>3}  {:<36} {:<18} {}",
                p.id,
                p.title,
                p.category.to_uppercase(),
                Route::ProjectDetail(p.id).path()
            ),
        );
    }
    out
}

pub fn render_project(project: &Project) -> String {
    let mut out = String::new();
    line(&mut out, &format!("=== {} ===", project.title));
    line(&mut out, &project.category.to_uppercase());
    out.push('\n');
    row(&mut out, "location", &project.location);
    row(&mut out, "year", &project.year.to_string());
    row(&mut out, "summary", &shorten(&project.summary));
    row(&mut out, "image", &project.image);
    out
}

fn shorten(text: &str) -> String {
    if text.chars().count() > MAX_SUMMARY_CHARS {
        let cut: String = text.chars().take(MAX_SUMMARY_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

// ── RFP form ──

pub fn render_draft(draft: &Draft) -> String {
    let mut out = String::new();
    line(&mut out, "Client Information");
    row(&mut out, "first name", &draft.first_name);
    row(&mut out, "last name", &draft.last_name);
    row(&mut out, "email", &draft.email);
    row(&mut out, "phone", &draft.phone);
    row(&mut out, "company", &draft.company);
    row(&mut out, "job title", &draft.role);
    out.push('\n');

    line(&mut out, "Project Parameters");
    row(&mut out, "project", &draft.project_name);
    row(&mut out, "location", &draft.location);
    row(&mut out, "sector", draft.sector.map_or("", |s| s.label()));
    row(&mut out, "budget", draft.budget.map_or("", |b| b.label()));
    row(&mut out, "timeline", &draft.timeline);
    line(&mut out, "  services");
    for tag in ServiceTag::ALL {
        let check = if draft.is_selected(tag) { "x" } else { " " };
        line(&mut out, &format!("    [{check}] {}", tag.label()));
    }
    out.push('\n');

    line(&mut out, "Scope of Work");
    for text in draft.description.lines() {
        line(&mut out, &format!("  {text}"));
    }
    out
}

/// Aligned `label value` row; blank values are left out.
fn row(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        line(out, &format!("  {label:<12} {value}"));
    }
}

pub fn render_confirmation(confirmation: &Confirmation) -> String {
    format!("{confirmation}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use zenthera_core::{Field, NoopViewport, Portfolio};

    #[test]
    fn empty_filter_shows_message() {
        let filter = CategoryFilter::parse("NUCLEAR");
        let out = render_portfolio(&[], &filter);
        assert!(out.contains("No active projects found in this sector."));
    }

    #[test]
    fn active_filter_is_bracketed() {
        let portfolio = Portfolio::builtin().unwrap();
        let filter = CategoryFilter::parse("offshore");
        let out = render_portfolio(&portfolio.filter(&filter), &filter);
        assert!(out.contains("[OFFSHORE]"));
        assert!(out.contains("/projects/1"));
        assert!(!out.contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn nav_marks_current_route() {
        let mut nav = Navigator::new(Arc::new(NoopViewport), None);
        nav.navigate("/quote").unwrap();
        let out = render_nav(&nav);
        let quote_line = out.lines().find(|l| l.contains("/quote")).unwrap();
        assert!(quote_line.starts_with('*'));
        assert!(quote_line.contains("[ Get a Quote ]"));
    }

    #[test]
    fn draft_lists_selected_services() {
        let mut draft = Draft::new();
        draft.set_field(Field::FirstName, "Ada");
        draft.toggle_service(ServiceTag::Feed);
        let out = render_draft(&draft);
        assert!(out.contains("[x] FEED (Front-End Engineering Design)"));
        assert!(out.contains("[ ] HSE Consulting"));
        assert!(out.contains("first name   Ada"));
        assert!(!out.contains("company"));
    }

    #[test]
    fn long_summary_is_shortened() {
        let long = "x".repeat(100);
        let short = shorten(&long);
        assert_eq!(short.chars().count(), MAX_SUMMARY_CHARS);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn project_card_rows() {
        let portfolio = Portfolio::builtin().unwrap();
        let out = render_project(portfolio.get(1).unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("=== ") && lines[0].ends_with(" ==="));
        assert_eq!(lines[1], "OFFSHORE");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("  location     "));
        assert!(out.ends_with('\n'));
    }
}
