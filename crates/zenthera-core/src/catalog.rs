//! Fixed option lists offered by the RFP form.
//!
//! Each enumeration carries the exact label shown to the user. Labels parse
//! back case-insensitively so the terminal front end can accept typed input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

// ── Sector ──

/// Industry sector of the requested project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    OffshoreConstruction,
    OnshoreOilGas,
    RenewableEnergy,
    HeavyInfrastructure,
    Petrochemical,
    PipelineSystems,
    PowerGeneration,
    Other,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::OffshoreConstruction,
        Sector::OnshoreOilGas,
        Sector::RenewableEnergy,
        Sector::HeavyInfrastructure,
        Sector::Petrochemical,
        Sector::PipelineSystems,
        Sector::PowerGeneration,
        Sector::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OffshoreConstruction => "Offshore Construction",
            Self::OnshoreOilGas => "Onshore Oil & Gas",
            Self::RenewableEnergy => "Renewable Energy (Wind/Solar)",
            Self::HeavyInfrastructure => "Heavy Infrastructure",
            Self::Petrochemical => "Petrochemical / Refining",
            Self::PipelineSystems => "Pipeline Systems",
            Self::PowerGeneration => "Power Generation",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_label(&Self::ALL, s, Self::label)
            .ok_or_else(|| CoreError::UnknownSector(s.to_string()))
    }
}

// ── Budget ──

/// Estimated budget range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Budget {
    Under10M,
    From10To50M,
    From50To100M,
    From100To500M,
    Over500M,
    ToBeDetermined,
}

impl Budget {
    pub const ALL: [Budget; 6] = [
        Budget::Under10M,
        Budget::From10To50M,
        Budget::From50To100M,
        Budget::From100To500M,
        Budget::Over500M,
        Budget::ToBeDetermined,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under10M => "Under $10 Million",
            Self::From10To50M => "$10 Million - $50 Million",
            Self::From50To100M => "$50 Million - $100 Million",
            Self::From100To500M => "$100 Million - $500 Million",
            Self::Over500M => "$500 Million+",
            Self::ToBeDetermined => "To Be Determined",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Budget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_label(&Self::ALL, s, Self::label)
            .ok_or_else(|| CoreError::UnknownBudget(s.to_string()))
    }
}

// ── Services ──

/// One service offering selectable on the form.
///
/// Ordering follows the on-screen order, which keeps a `BTreeSet<ServiceTag>`
/// listing selections the way the form displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceTag {
    Epc,
    Feed,
    ProjectManagement,
    MaintenanceTurnaround,
    FeasibilityStudy,
    FabricationInstallation,
    HseConsulting,
    LogisticsHeavyLift,
}

impl ServiceTag {
    pub const ALL: [ServiceTag; 8] = [
        ServiceTag::Epc,
        ServiceTag::Feed,
        ServiceTag::ProjectManagement,
        ServiceTag::MaintenanceTurnaround,
        ServiceTag::FeasibilityStudy,
        ServiceTag::FabricationInstallation,
        ServiceTag::HseConsulting,
        ServiceTag::LogisticsHeavyLift,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Epc => "EPC (Engineering, Procurement, Construction)",
            Self::Feed => "FEED (Front-End Engineering Design)",
            Self::ProjectManagement => "Project Management Consultancy",
            Self::MaintenanceTurnaround => "Maintenance & Turnaround",
            Self::FeasibilityStudy => "Feasibility Study",
            Self::FabricationInstallation => "Fabrication & Installation",
            Self::HseConsulting => "HSE Consulting",
            Self::LogisticsHeavyLift => "Logistics & Heavy Lift",
        }
    }

    /// Short form accepted on the command line: the label up to the first
    /// parenthesis, e.g. "EPC" or "FEED".
    fn short_label(&self) -> &'static str {
        let label = self.label();
        match label.find(" (") {
            Some(i) => &label[..i],
            None => label,
        }
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_label(&Self::ALL, s, Self::label)
            .or_else(|| find_by_label(&Self::ALL, s, Self::short_label))
            .ok_or_else(|| CoreError::UnknownService(s.to_string()))
    }
}

/// Parse a select-style value where the blank option means "none chosen".
///
/// An empty or whitespace-only label gives `Ok(None)`; anything else must
/// parse as `T`.
pub fn parse_optional<T: FromStr>(s: &str) -> Result<Option<T>, T::Err> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    s.parse().map(Some)
}

fn find_by_label<T: Copy>(all: &[T], s: &str, label: fn(&T) -> &'static str) -> Option<T> {
    let s = s.trim();
    all.iter().copied().find(|v| label(v).eq_ignore_ascii_case(s))
}
