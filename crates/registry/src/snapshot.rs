//! Structured, versioned form of a registry for persistence.
//!
//! Records are stored as ordered lists so iteration order survives a
//! save/load cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catering_core::{DishName, GuestName, MenuName};

/// Current on-disk layout version.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub name: MenuName,
    /// Remaining servings at the time of the snapshot.
    pub capacity: u32,
    #[serde(default)]
    pub dishes: Vec<DishName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub name: GuestName,
    #[serde(default)]
    pub menu: Option<MenuName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub menus: Vec<MenuRecord>,
    #[serde(default)]
    pub guests: Vec<GuestRecord>,
}

impl RegistrySnapshot {
    /// An empty snapshot in the current format.
    pub fn empty(saved_at: DateTime<Utc>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            saved_at,
            menus: Vec::new(),
            guests: Vec::new(),
        }
    }
}
