use catering_core::{Entity, GuestName, MenuName};

/// A named attendee who may hold at most one menu assignment.
///
/// The assignment is a lookup key into the registry's menus; the registry owns
/// every `MenuOption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: GuestName,
    menu: Option<MenuName>,
}

impl Guest {
    pub fn new(name: GuestName) -> Self {
        Self { name, menu: None }
    }

    pub(crate) fn with_menu(name: GuestName, menu: Option<MenuName>) -> Self {
        Self { name, menu }
    }

    pub fn name(&self) -> &GuestName {
        &self.name
    }

    pub fn assigned_menu(&self) -> Option<&MenuName> {
        self.menu.as_ref()
    }

    pub fn is_assigned(&self) -> bool {
        self.menu.is_some()
    }

    pub(crate) fn assign(&mut self, menu: MenuName) {
        self.menu = Some(menu);
    }

    pub(crate) fn clear_assignment(&mut self) -> Option<MenuName> {
        self.menu.take()
    }
}

impl Entity for Guest {
    type Id = GuestName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
