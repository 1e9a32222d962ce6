//! Core types for the Zenthera site: the RFP draft and its fixed enumerations,
//! the project portfolio, and the route table.

mod error;
pub use error::CoreError;

pub mod catalog;
pub mod draft;
pub mod portfolio;
pub mod reference;
pub mod route;
pub mod viewport;

pub use catalog::{Budget, Sector, ServiceTag, parse_optional};
pub use draft::{Draft, Field};
pub use portfolio::{CategoryFilter, Portfolio, Project};
pub use reference::ReferenceId;
pub use route::{NavItem, Navigator, Route, NAV_ITEMS};
pub use viewport::{Animator, NoopViewport, Viewport};
