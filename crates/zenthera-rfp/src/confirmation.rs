use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use zenthera_core::{Draft, ReferenceId, Sector};

/// Snapshot of a submitted draft, shown on the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub first_name: String,
    pub project_name: String,
    pub sector: Option<Sector>,
    pub email: String,
    pub reference: ReferenceId,
    pub submitted_at: DateTime<Utc>,
}

impl Confirmation {
    pub fn from_draft(draft: &Draft, reference: ReferenceId) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            project_name: draft.project_name.clone(),
            sector: draft.sector,
            email: draft.email.clone(),
            reference,
            submitted_at: Utc::now(),
        }
    }

    pub fn headline(&self) -> &'static str {
        "RFP Received Successfully"
    }

    fn project_label(&self) -> &str {
        if self.project_name.is_empty() {
            "your project"
        } else {
            &self.project_name
        }
    }

    fn sector_label(&self) -> &str {
        self.sector.as_ref().map_or("relevant", Sector::label)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f)?;
        writeln!(
            f,
            "Thank you, {}. Your request for {} has been logged in our tender system.",
            self.first_name,
            self.project_label()
        )?;
        writeln!(f, "Reference ID: {}", self.reference)?;
        writeln!(f)?;
        write!(
            f,
            "Our Commercial Director for the {} sector will review the scope and reach out to {} within 48 hours.",
            self.sector_label(),
            self.email
        )
    }
}
