use catering_core::{DishName, Entity, MenuName};

/// A named catering choice with a fixed dish list and a finite number of servings.
///
/// `remaining` is the count of servings not yet claimed by a guest. Only the
/// registry moves it, one serving at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    name: MenuName,
    remaining: u32,
    dishes: Vec<DishName>,
}

impl MenuOption {
    pub fn new(name: MenuName, capacity: u32, dishes: Vec<DishName>) -> Self {
        Self {
            name,
            remaining: capacity,
            dishes,
        }
    }

    pub fn name(&self) -> &MenuName {
        &self.name
    }

    /// Servings still available for assignment.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn dishes(&self) -> &[DishName] {
        &self.dishes
    }

    pub fn is_available(&self) -> bool {
        self.remaining > 0
    }

    /// Claim one serving. Returns `false` (and changes nothing) when sold out.
    pub(crate) fn try_take_serving(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Give a previously claimed serving back.
    pub(crate) fn return_serving(&mut self) {
        self.remaining = self.remaining.saturating_add(1);
    }
}

impl Entity for MenuOption {
    type Id = MenuName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(capacity: u32) -> MenuOption {
        MenuOption::new(
            MenuName::new("Vegetarian").unwrap(),
            capacity,
            vec![DishName::new("Salad").unwrap()],
        )
    }

    #[test]
    fn take_serving_decrements_until_sold_out() {
        let mut m = menu(1);
        assert!(m.is_available());
        assert!(m.try_take_serving());
        assert_eq!(m.remaining(), 0);

        assert!(!m.try_take_serving());
        assert_eq!(m.remaining(), 0);
        assert!(!m.is_available());
    }

    #[test]
    fn return_serving_restores_availability() {
        let mut m = menu(0);
        m.return_serving();
        assert_eq!(m.remaining(), 1);
        assert_eq!(m.dishes()[0].as_str(), "Salad");
    }
}
