use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Simulated network latency between submit and confirmation.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// What "submit another request" keeps from the previous draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Clear description and services only; contact details and project
    /// parameters carry over to the next request.
    #[default]
    RetainContact,
    /// Start from an empty draft.
    ClearAll,
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RetainContact => "retain-contact",
            Self::ClearAll => "clear-all",
        })
    }
}

impl FromStr for ResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain-contact" => Ok(Self::RetainContact),
            "clear-all" => Ok(Self::ClearAll),
            other => Err(format!(
                "unknown reset policy '{other}' (expected retain-contact or clear-all)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub submit_delay: Duration,
    pub reset_policy: ResetPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            reset_policy: ResetPolicy::default(),
        }
    }
}
