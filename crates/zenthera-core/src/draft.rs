//! The in-memory RFP draft for one form session.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;
use crate::catalog::{Budget, Sector, ServiceTag};

/// Marker placed in front of AI-authored text appended to a non-empty description.
pub const AI_REFINEMENT_MARKER: &str = "[AI Refinement]:";

/// Free-text fields of the draft, addressable by name.
///
/// Sector and budget are not listed here: they come from fixed lists and are
/// set through [`Draft::set_sector`] and [`Draft::set_budget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Role,
    ProjectName,
    Location,
    Timeline,
    Description,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Role,
        Field::ProjectName,
        Field::Location,
        Field::Timeline,
        Field::Description,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Role => "role",
            Self::ProjectName => "project-name",
            Self::Location => "location",
            Self::Timeline => "timeline",
            Self::Description => "description",
        }
    }

    /// Whether the form marks this field `required`.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::FirstName
                | Self::LastName
                | Self::Email
                | Self::Phone
                | Self::ProjectName
                | Self::Location
                | Self::Description
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('_', "-").to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == key)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Unsaved state of one Request for Proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub project_name: String,
    pub location: String,
    pub sector: Option<Sector>,
    pub budget: Option<Budget>,
    pub timeline: String,
    services: BTreeSet<ServiceTag>,
    pub description: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one free-text field. No validation is applied.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Role => &self.role,
            Field::ProjectName => &self.project_name,
            Field::Location => &self.location,
            Field::Timeline => &self.timeline,
            Field::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Role => &mut self.role,
            Field::ProjectName => &mut self.project_name,
            Field::Location => &mut self.location,
            Field::Timeline => &mut self.timeline,
            Field::Description => &mut self.description,
        }
    }

    pub fn set_sector(&mut self, sector: Option<Sector>) {
        self.sector = sector;
    }

    pub fn set_budget(&mut self, budget: Option<Budget>) {
        self.budget = budget;
    }

    /// Flip membership of `tag`: remove it if selected, insert it otherwise.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_service(&mut self, tag: ServiceTag) -> bool {
        if self.services.remove(&tag) {
            false
        } else {
            self.services.insert(tag);
            true
        }
    }

    pub fn services(&self) -> &BTreeSet<ServiceTag> {
        &self.services
    }

    pub fn is_selected(&self, tag: ServiceTag) -> bool {
        self.services.contains(&tag)
    }

    /// Add AI-authored text to the description.
    ///
    /// An empty description is replaced outright; otherwise the text goes
    /// after a blank line and [`AI_REFINEMENT_MARKER`].
    pub fn append_refinement(&mut self, text: &str) {
        if self.description.is_empty() {
            self.description = text.to_string();
        } else {
            self.description = format!(
                "{}\n\n{AI_REFINEMENT_MARKER}\n{}",
                self.description, text
            );
        }
    }

    /// Required fields that are still empty, in form order.
    ///
    /// This is the check a browser performs for `required` inputs; the
    /// controller itself never calls it.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// Clear the scope of work (description and services), keeping contact
    /// and project parameters.
    pub fn clear_scope(&mut self) {
        self.description.clear();
        self.services.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled() -> Draft {
        let mut d = Draft::new();
        d.set_field(Field::FirstName, "Ada");
        d.set_field(Field::LastName, "Okafor");
        d.set_field(Field::Email, "ada@example.com");
        d.set_field(Field::Phone, "+44 20 7946 0000");
        d.set_field(Field::ProjectName, "West Texas Pipeline Expansion");
        d.set_field(Field::Location, "Midland, TX");
        d.set_field(Field::Description, "Two compressor stations.");
        d
    }

    #[test]
    fn set_field_is_idempotent() {
        let mut d = filled();
        let before = d.clone();
        d.set_field(Field::FirstName, "Ada");
        d.set_field(Field::Location, "Midland, TX");
        assert_eq!(d, before);
    }

    #[test]
    fn set_field_replaces_only_that_field() {
        let mut d = filled();
        d.set_field(Field::Company, "Permian Midstream");
        assert_eq!(d.company, "Permian Midstream");
        assert_eq!(d.get(Field::Company), "Permian Midstream");
        assert_eq!(d.first_name, "Ada");
    }

    #[test]
    fn toggle_twice_removes() {
        let mut d = Draft::new();
        assert!(d.toggle_service(ServiceTag::Feed));
        assert!(d.is_selected(ServiceTag::Feed));
        assert!(!d.toggle_service(ServiceTag::Feed));
        assert!(d.services().is_empty());
    }

    #[test]
    fn append_to_empty_description_replaces() {
        let mut d = Draft::new();
        d.append_refinement("A 20 km subsea tie-back.");
        assert_eq!(d.description, "A 20 km subsea tie-back.");
    }

    #[test]
    fn append_to_existing_description_adds_marker() {
        let mut d = Draft::new();
        d.set_field(Field::Description, "Rough notes.");
        d.append_refinement("Refined brief.");
        assert_eq!(
            d.description,
            "Rough notes.\n\n[AI Refinement]:\nRefined brief."
        );
    }

    #[test]
    fn missing_required_lists_blank_fields() {
        let d = Draft::new();
        let missing = d.missing_required();
        assert_eq!(
            missing,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Phone,
                Field::ProjectName,
                Field::Location,
                Field::Description,
            ]
        );
        assert!(filled().missing_required().is_empty());
    }

    #[test]
    fn clear_scope_keeps_contact() {
        let mut d = filled();
        d.set_field(Field::Company, "Permian Midstream");
        d.set_sector(Some(Sector::PipelineSystems));
        d.toggle_service(ServiceTag::Epc);
        d.clear_scope();
        assert!(d.description.is_empty());
        assert!(d.services().is_empty());
        assert_eq!(d.company, "Permian Midstream");
        assert_eq!(d.sector, Some(Sector::PipelineSystems));
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("project-name".parse::<Field>().unwrap(), Field::ProjectName);
        assert_eq!("FIRST_NAME".parse::<Field>().unwrap(), Field::FirstName);
        assert!("sector".parse::<Field>().is_err());
    }

    #[test]
    fn draft_json_keeps_services() {
        let mut d = filled();
        d.toggle_service(ServiceTag::HseConsulting);
        d.set_budget(Some(Budget::Over500M));
        let json = serde_json::to_string(&d).unwrap();
        let parsed: Draft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }

    proptest! {
        #[test]
        fn toggle_membership_is_parity(indices in proptest::collection::vec(0usize..8, 0..64)) {
            let mut d = Draft::new();
            for &i in &indices {
                d.toggle_service(ServiceTag::ALL[i]);
            }
            for (i, tag) in ServiceTag::ALL.iter().enumerate() {
                let count = indices.iter().filter(|&&j| j == i).count();
                prop_assert_eq!(d.is_selected(*tag), count % 2 == 1);
            }
        }
    }
}
