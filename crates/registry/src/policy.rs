use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catering_core::DomainError;

/// How `reassign_menu` behaves when the target menu cannot take the guest.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReassignPolicy {
    /// All-or-nothing: a failed reassignment leaves the guest on their old menu.
    #[default]
    Atomic,
    /// The old serving is returned before the target is checked; a failed
    /// reassignment leaves the guest unassigned.
    ReleaseFirst,
}

impl ReassignPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReassignPolicy::Atomic => "atomic",
            ReassignPolicy::ReleaseFirst => "release-first",
        }
    }
}

impl core::fmt::Display for ReassignPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReassignPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atomic" => Ok(ReassignPolicy::Atomic),
            "release-first" | "release_first" => Ok(ReassignPolicy::ReleaseFirst),
            other => Err(DomainError::validation(format!(
                "unknown reassign policy '{other}' (expected: atomic, release-first)"
            ))),
        }
    }
}
