//! Project portfolio: the built-in catalogue and category filtering.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;

const BUILTIN_JSON: &str = include_str!("../data/projects.json");

/// Sentinel label for the unfiltered view.
pub const ALL_PROJECTS: &str = "ALL PROJECTS";

/// Filter buttons in display order.
pub const FILTER_LABELS: &[&str] = &[
    ALL_PROJECTS,
    "OIL & GAS",
    "OFFSHORE",
    "RENEWABLE ENERGY",
    "PETROCHEMICALS",
    "INFRASTRUCTURE",
];

/// Projects shown on the home page.
pub const FEATURED_IDS: &[u32] = &[1, 2, 3];

/// Shown instead of an empty grid when a filter matches nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No active projects found in this sector.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub location: String,
    pub year: u16,
    pub summary: String,
    /// Hero image URL.
    pub image: String,
}

/// Category selection for the portfolio grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Upper-cased category name.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a button label or free text.
    ///
    /// `ALL PROJECTS` (any case) and `all` select everything.
    pub fn parse(label: &str) -> Self {
        let upper = label.trim().to_uppercase();
        if upper == ALL_PROJECTS || upper == "ALL" {
            Self::All
        } else {
            Self::Category(upper)
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(cat) => project.category.to_uppercase() == *cat,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROJECTS),
            Self::Category(cat) => f.write_str(cat),
        }
    }
}

/// An ordered collection of portfolio projects.
#[derive(Debug, Clone)]
pub struct Portfolio {
    projects: Vec<Project>,
}

impl Portfolio {
    /// The catalogue compiled into the binary.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse a JSON array of projects.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        debug!(count = projects.len(), "portfolio loaded");
        Ok(Self { projects })
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching `filter`, in catalogue order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| FEATURED_IDS.contains(&p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().expect("builtin catalogue parses")
    }

    #[test]
    fn builtin_ids_are_unique() {
        let p = portfolio();
        let mut ids: Vec<u32> = p.all().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), p.all().len());
    }

    #[test]
    fn every_filter_button_has_projects() {
        let p = portfolio();
        for label in FILTER_LABELS {
            assert!(
                !p.filter(&CategoryFilter::parse(label)).is_empty(),
                "{label} matched nothing"
            );
        }
    }

    #[test]
    fn category_filter_returns_only_matches() {
        let p = portfolio();
        let offshore = p.filter(&CategoryFilter::parse("OFFSHORE"));
        assert_eq!(offshore.len(), 2);
        assert!(offshore.iter().all(|p| p.category == "Offshore"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let p = portfolio();
        assert_eq!(
            p.filter(&CategoryFilter::parse("oil & gas")),
            p.filter(&CategoryFilter::parse("OIL & GAS"))
        );
    }

    #[test]
    fn all_sentinel_returns_everything() {
        let p = portfolio();
        assert_eq!(p.filter(&CategoryFilter::parse(ALL_PROJECTS)).len(), p.all().len());
        assert_eq!(p.filter(&CategoryFilter::default()).len(), p.all().len());
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    }

    #[test]
    fn unmatched_category_is_empty() {
        let p = portfolio();
        assert!(p.filter(&CategoryFilter::parse("NUCLEAR")).is_empty());
    }

    #[test]
    fn featured_and_lookup() {
        let p = portfolio();
        let featured: Vec<u32> = p.featured().iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 3]);
        assert_eq!(p.get(7).map(|p| p.category.as_str()), Some("Offshore"));
        assert!(p.get(999).is_none());
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(
            Portfolio::from_json("[{\"id\": 1}]"),
            Err(CoreError::Portfolio(_))
        ));
    }
}
