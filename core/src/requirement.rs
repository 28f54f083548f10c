use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseRequirementError;

/// Whether an absent flag is an error.
///
/// `Optional` is the default: a missing flag yields `Ok(None)`. `Required`
/// turns a missing (or, for typed extractors, invalid) value into an error.
///
/// # Examples
///
/// ```
/// use argv_extract_core::Requirement;
///
/// assert_eq!(Requirement::default(), Requirement::Optional);
/// assert_eq!("required".parse::<Requirement>().unwrap(), Requirement::Required);
/// assert!("sometimes".parse::<Requirement>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Absence is an error.
    Required,
    /// Absence yields an empty result.
    #[default]
    Optional,
}

impl Requirement {
    /// Returns `true` for [`Requirement::Required`].
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }

    /// Returns the lowercase name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Requirement {
    type Err = ParseRequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            other => Err(ParseRequirementError(other.to_string())),
        }
    }
}

impl From<Option<Requirement>> for Requirement {
    fn from(value: Option<Requirement>) -> Self {
        value.unwrap_or_default()
    }
}
