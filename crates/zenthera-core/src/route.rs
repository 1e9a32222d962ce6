//! Path-based routes and the navigation bar.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::CoreError;
use crate::viewport::{Animator, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Projects,
    ProjectDetail(u32),
    Careers,
    Contact,
    Quote,
}

impl Route {
    /// Parse a location into a route.
    ///
    /// Accepts plain paths (`/quote`) and hash-router locations (`#/quote`).
    /// Query strings, fragments after the path and trailing slashes are ignored.
    pub fn parse(location: &str) -> Result<Self, CoreError> {
        let path = location.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        let route = match path {
            "" => Self::Home,
            "/about" => Self::About,
            "/services" => Self::Services,
            "/projects" => Self::Projects,
            "/careers" => Self::Careers,
            "/contact" => Self::Contact,
            "/quote" => Self::Quote,
            other => {
                let id = other
                    .strip_prefix("/projects/")
                    .and_then(project_id)
                    .ok_or_else(|| CoreError::UnknownRoute(location.to_string()))?;
                Self::ProjectDetail(id)
            }
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Services => "/services".to_string(),
            Self::Projects => "/projects".to_string(),
            Self::ProjectDetail(id) => format!("/projects/{id}"),
            Self::Careers => "/careers".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Quote => "/quote".to_string(),
        }
    }

    /// Page title used for the document head.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Global EPC & Construction Leaders",
            Self::About => "About Zenthera Groups",
            Self::Services => "Engineering & Construction Services",
            Self::Projects => "Project Portfolio",
            Self::ProjectDetail(_) => "Project Details",
            Self::Careers => "Careers",
            Self::Contact => "Contact Us",
            Self::Quote => "Request for Proposal (RFP)",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One entry of the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    /// Rendered as a call-to-action button rather than a text link.
    pub is_button: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", route: Route::Home, is_button: false },
    NavItem { label: "About", route: Route::About, is_button: false },
    NavItem { label: "Services", route: Route::Services, is_button: false },
    NavItem { label: "Projects", route: Route::Projects, is_button: false },
    NavItem { label: "Careers", route: Route::Careers, is_button: false },
    NavItem { label: "Contact", route: Route::Contact, is_button: false },
    NavItem { label: "Get a Quote", route: Route::Quote, is_button: true },
];

/// Tracks the current route and resets the viewport when it changes.
pub struct Navigator {
    current: Route,
    viewport: Arc<dyn Viewport>,
    animator: Option<Arc<dyn Animator>>,
}

impl Navigator {
    pub fn new(viewport: Arc<dyn Viewport>, animator: Option<Arc<dyn Animator>>) -> Self {
        Self {
            current: Route::Home,
            viewport,
            animator,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `location`.
    ///
    /// A change of path scrolls to the top and refreshes the animation
    /// capability when one is present. Navigating to the current path does
    /// nothing.
    pub fn navigate(&mut self, location: &str) -> Result<Route, CoreError> {
        let route = Route::parse(location)?;
        if route != self.current {
            debug!(from = %self.current, to = %route, "route change");
            self.current = route;
            self.viewport.scroll_to_top();
            if let Some(animator) = &self.animator {
                animator.refresh();
            }
        }
        Ok(route)
    }

    /// Whether a nav item points at the current route.
    pub fn is_active(&self, item: &NavItem) -> bool {
        item.route == self.current
    }
}

/// A project id as written in a path: plain digits without a sign or leading
/// zeros, so the parsed route renders back to the same path.
fn project_id(s: &str) -> Option<u32> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical { s.parse().ok() } else { None }
}
