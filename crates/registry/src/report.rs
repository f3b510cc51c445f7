//! Read-only report rows produced by the registry.

use catering_core::{DishName, GuestName, MenuName, ValueObject};

/// The menu a guest will receive, with its dishes in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedMenu {
    pub menu: MenuName,
    pub dishes: Vec<DishName>,
}

/// One guest and their assignment (`None` means unassigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentLine {
    pub guest: GuestName,
    pub assignment: Option<AssignedMenu>,
}

/// Remaining servings for one menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub menu: MenuName,
    pub remaining: u32,
}

impl ValueObject for AssignedMenu {}
impl ValueObject for AssignmentLine {}
impl ValueObject for Availability {}
