//! Cosmetic reference numbers shown on the RFP confirmation.
//!
//! A reference is a random integer in `[0, 10000)` rendered as `TR-<n>`. It is
//! not derived from the draft and is not unique across sessions.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::CoreError;

const PREFIX: &str = "TR-";
const UPPER: u16 = 10_000;

/// Serialized as its display form, so a deserialized value is range-checked
/// the same way a parsed one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceId(u16);

impl ReferenceId {
    /// Draw a reference from the thread-local generator.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..UPPER))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for ReferenceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| CoreError::BadReference(s.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::BadReference(s.to_string()));
        }
        match digits.parse::<u16>() {
            Ok(n) if n < UPPER => Ok(Self(n)),
            _ => Err(CoreError::BadReference(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReferenceId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReferenceId> for String {
    fn from(id: ReferenceId) -> Self {
        id.to_string()
    }
}
