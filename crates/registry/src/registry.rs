//! The catering registry: menus, guests and the assignments between them.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use catering_core::{DishName, DomainError, DomainResult, Entity, GuestName, MenuName};

use crate::error::{AssignmentFailure, ReassignmentFailure, RegistryError, RegistryResult};
use crate::guest::Guest;
use crate::menu::MenuOption;
use crate::policy::ReassignPolicy;
use crate::report::{AssignedMenu, AssignmentLine, Availability};
use crate::snapshot::{GuestRecord, MenuRecord, RegistrySnapshot, SNAPSHOT_FORMAT_VERSION};

/// Owns every menu and guest of one catering event.
///
/// ## Capacity invariant
///
/// For every menu `M`, `M.remaining() + assigned_count(M)` equals the capacity
/// `M` was created with. Every mutation below moves servings one at a time to
/// keep that sum fixed:
///
/// - a successful assignment claims one serving of the target menu and
///   returns the guest's previous serving, if any
/// - overwriting a guest returns their serving
/// - overwriting a menu unassigns the guests that held servings of the
///   replaced menu
///
/// Both maps iterate in insertion order; an overwrite keeps the original slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CateringRegistry {
    menus: IndexMap<MenuName, MenuOption>,
    guests: IndexMap<GuestName, Guest>,
    policy: ReassignPolicy,
}

impl CateringRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ReassignPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ReassignPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ReassignPolicy) {
        self.policy = policy;
    }

    /// Insert a menu, replacing any menu with the same name.
    ///
    /// Guests assigned to a replaced menu lose their assignment. Returns the
    /// replaced menu.
    pub fn add_menu(
        &mut self,
        name: MenuName,
        capacity: u32,
        dishes: Vec<DishName>,
    ) -> Option<MenuOption> {
        let menu = MenuOption::new(name, capacity, dishes);
        let replaced = self.menus.insert(menu.id().clone(), menu)?;

        for guest in self.guests.values_mut() {
            if guest.assigned_menu() == Some(replaced.name()) {
                guest.clear_assignment();
            }
        }

        Some(replaced)
    }

    /// Insert an unassigned guest, replacing any guest with the same name.
    ///
    /// A replaced guest's serving goes back to its menu. Returns the replaced
    /// guest.
    pub fn add_guest(&mut self, name: GuestName) -> Option<Guest> {
        let guest = Guest::new(name);
        let replaced = self.guests.insert(guest.id().clone(), guest)?;

        if let Some(menu) = replaced.assigned_menu() {
            self.return_serving(menu);
        }

        Some(replaced)
    }

    /// Give `guest` one serving of `menu`.
    ///
    /// Fails without touching state when the guest or menu is unknown or the
    /// menu has no servings left. A guest already holding a serving gets it
    /// returned once the new one is claimed.
    pub fn assign_menu(&mut self, guest: &str, menu: &str) -> RegistryResult<()> {
        let fail = |reason| RegistryError::AssignmentFailed {
            guest: guest.to_string(),
            menu: menu.to_string(),
            reason,
        };

        let previous = match self.guests.get(guest) {
            Some(g) => g.assigned_menu().cloned(),
            None => return Err(fail(AssignmentFailure::GuestNotFound)),
        };

        let target = self
            .menus
            .get_mut(menu)
            .ok_or_else(|| fail(AssignmentFailure::MenuNotFound))?;
        if !target.try_take_serving() {
            return Err(fail(AssignmentFailure::MenuExhausted));
        }
        let target = target.name().clone();

        if let Some(previous) = previous {
            self.return_serving(&previous);
        }
        self.set_assignment(guest, target);

        Ok(())
    }

    /// Move an assigned guest to `new_menu`.
    ///
    /// When the target cannot take the guest, the outcome depends on
    /// [`ReassignPolicy`]: `Atomic` leaves everything as it was,
    /// `ReleaseFirst` leaves the guest unassigned with their old serving
    /// returned.
    pub fn reassign_menu(&mut self, guest: &str, new_menu: &str) -> RegistryResult<()> {
        let fail = |reason| RegistryError::ReassignmentFailed {
            guest: guest.to_string(),
            menu: new_menu.to_string(),
            reason,
        };

        let current = match self.guests.get(guest) {
            Some(g) => g
                .assigned_menu()
                .cloned()
                .ok_or_else(|| fail(ReassignmentFailure::NotAssigned))?,
            None => return Err(fail(ReassignmentFailure::GuestNotFound)),
        };

        if current.as_str() == new_menu {
            return Ok(());
        }

        if self.policy == ReassignPolicy::ReleaseFirst {
            self.return_serving(&current);
            if let Some(g) = self.guests.get_mut(guest) {
                g.clear_assignment();
            }
        }

        let target = self
            .menus
            .get_mut(new_menu)
            .ok_or_else(|| fail(ReassignmentFailure::MenuNotFound))?;
        if !target.try_take_serving() {
            return Err(fail(ReassignmentFailure::MenuExhausted));
        }
        let target = target.name().clone();

        if self.policy == ReassignPolicy::Atomic {
            self.return_serving(&current);
        }
        self.set_assignment(guest, target);

        Ok(())
    }

    /// Every guest in insertion order with their menu and its dishes.
    pub fn list_assignments(&self) -> Vec<AssignmentLine> {
        self.guests
            .values()
            .map(|g| AssignmentLine {
                guest: g.name().clone(),
                assignment: g
                    .assigned_menu()
                    .and_then(|m| self.menus.get(m))
                    .map(|m| AssignedMenu {
                        menu: m.name().clone(),
                        dishes: m.dishes().to_vec(),
                    }),
            })
            .collect()
    }

    /// Every menu in insertion order with its remaining servings.
    pub fn remaining_availability(&self) -> Vec<Availability> {
        self.menus
            .values()
            .map(|m| Availability {
                menu: m.name().clone(),
                remaining: m.remaining(),
            })
            .collect()
    }

    pub fn menu(&self, name: &str) -> Option<&MenuOption> {
        self.menus.get(name)
    }

    pub fn guest(&self, name: &str) -> Option<&Guest> {
        self.guests.get(name)
    }

    pub fn menus(&self) -> impl Iterator<Item = &MenuOption> {
        self.menus.values()
    }

    pub fn guests(&self) -> impl Iterator<Item = &Guest> {
        self.guests.values()
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty() && self.guests.is_empty()
    }

    /// Number of guests currently holding a serving of `menu`.
    pub fn assigned_count(&self, menu: &str) -> usize {
        self.guests
            .values()
            .filter(|g| g.assigned_menu().is_some_and(|m| m.as_str() == menu))
            .count()
    }

    /// Capture the full registry state.
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> RegistrySnapshot {
        RegistrySnapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            saved_at,
            menus: self
                .menus
                .values()
                .map(|m| MenuRecord {
                    name: m.name().clone(),
                    capacity: m.remaining(),
                    dishes: m.dishes().to_vec(),
                })
                .collect(),
            guests: self
                .guests
                .values()
                .map(|g| GuestRecord {
                    name: g.name().clone(),
                    menu: g.assigned_menu().cloned(),
                })
                .collect(),
        }
    }

    /// Rebuild a registry from a snapshot.
    ///
    /// Rejects unknown format versions, duplicate names and guests pointing at
    /// menus the snapshot does not contain. The policy is not part of the
    /// snapshot and starts at its default.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> DomainResult<Self> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(DomainError::validation(format!(
                "unsupported snapshot format version {} (expected {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        let mut registry = Self::new();

        for record in snapshot.menus {
            let menu = MenuOption::new(record.name, record.capacity, record.dishes);
            if registry.menus.contains_key(menu.id()) {
                return Err(DomainError::conflict(format!("duplicate menu '{}'", menu.name())));
            }
            registry.menus.insert(menu.id().clone(), menu);
        }

        for record in snapshot.guests {
            if let Some(menu) = &record.menu {
                if !registry.menus.contains_key(menu) {
                    return Err(DomainError::not_found(format!(
                        "menu '{}' assigned to guest '{}'",
                        menu, record.name
                    )));
                }
            }
            let guest = Guest::with_menu(record.name, record.menu);
            if registry.guests.contains_key(guest.id()) {
                return Err(DomainError::conflict(format!("duplicate guest '{}'", guest.name())));
            }
            registry.guests.insert(guest.id().clone(), guest);
        }

        Ok(registry)
    }

    fn return_serving(&mut self, menu: &MenuName) {
        if let Some(m) = self.menus.get_mut(menu) {
            m.return_serving();
        }
    }

    fn set_assignment(&mut self, guest: &str, menu: MenuName) {
        if let Some(g) = self.guests.get_mut(guest) {
            g.assign(menu);
        }
    }
}
