//! Team-name rules shared by the validator and the match constructors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which characters a team name may contain.
///
/// Blank names and case-insensitive duplicates are rejected under every policy;
/// the policy only governs the character set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamNamePolicy {
    /// Only ASCII letters and spaces.
    #[default]
    Strict,
    /// Any non-blank name.
    Relaxed,
}

impl TeamNamePolicy {
    /// Whether `name` satisfies this policy's character rule.
    #[must_use]
    pub fn permits(self, name: &str) -> bool {
        match self {
            Self::Strict => {
                !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
            }
            Self::Relaxed => true,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for TeamNamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown team name policy: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for TeamNamePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// A name is blank when it is empty or only whitespace.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Case-insensitive team name comparison.
#[must_use]
pub fn same_team(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
