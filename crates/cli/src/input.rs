//! Input collection from an interactive console.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use catering_core::{DishName, DomainError, GuestName, MenuName};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while waiting for: {prompt}")]
    UnexpectedEof { prompt: String },
}

/// A menu as entered by the operator, ready for `CateringRegistry::add_menu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDraft {
    pub name: MenuName,
    pub capacity: u32,
    pub dishes: Vec<DishName>,
}

/// Source of the data the workflow feeds into the registry.
///
/// Implementations hand over well-typed values only: names are validated and
/// capacities are non-negative by construction.
pub trait InputCollector {
    fn collect_menus(&mut self) -> Result<Vec<MenuDraft>, InputError>;

    fn collect_guests(&mut self) -> Result<Vec<GuestName>, InputError>;

    /// Name of the menu `guest` should receive.
    fn choose_menu(&mut self, guest: &GuestName) -> Result<String, InputError>;

    /// Next `(guest, new menu)` pair to reassign, or `None` when done.
    fn next_reassignment(&mut self) -> Result<Option<(String, String)>, InputError>;
}

/// Line-oriented prompts over any reader/writer pair.
///
/// Invalid numbers and blank names are reported and asked for again.
#[derive(Debug)]
pub struct ConsoleCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    fn prompt_count(&mut self, prompt: &str) -> Result<u32, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<i64>().ok().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => return Ok(n),
                None => writeln!(self.output, "Please enter a whole number of zero or more.")?,
            }
        }
    }

    fn prompt_name<T>(&mut self, prompt: &str) -> Result<T, InputError>
    where
        T: FromStr<Err = DomainError>,
    {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<T>() {
                Ok(name) => return Ok(name),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> InputCollector for ConsoleCollector<R, W> {
    fn collect_menus(&mut self) -> Result<Vec<MenuDraft>, InputError> {
        let count = self.prompt_count("How many menu options do you want to add? ")?;

        let mut menus = Vec::new();
        for _ in 0..count {
            let name: MenuName = self.prompt_name("Menu name: ")?;
            let capacity = self.prompt_count("Servings available for this menu: ")?;
            let dish_count = self.prompt_count("How many dishes does this menu have? ")?;

            let mut dishes: Vec<DishName> = Vec::new();
            for j in 1..=dish_count {
                dishes.push(self.prompt_name(&format!("Dish {j}: "))?);
            }

            menus.push(MenuDraft {
                name,
                capacity,
                dishes,
            });
        }

        writeln!(self.output, "Menu options recorded.")?;
        Ok(menus)
    }

    fn collect_guests(&mut self) -> Result<Vec<GuestName>, InputError> {
        let count = self.prompt_count("How many guests will attend? ")?;

        let mut guests: Vec<GuestName> = Vec::new();
        for i in 1..=count {
            guests.push(self.prompt_name(&format!("Guest {i} name: "))?);
        }

        writeln!(self.output, "Guests recorded.")?;
        Ok(guests)
    }

    fn choose_menu(&mut self, guest: &GuestName) -> Result<String, InputError> {
        writeln!(self.output, "Assigning a menu for guest: {guest}")?;
        self.prompt_line("Menu to assign: ")
    }

    fn next_reassignment(&mut self) -> Result<Option<(String, String)>, InputError> {
        let guest = match self.prompt_line("Guest to move to another menu (blank to finish): ") {
            Ok(guest) if guest.is_empty() => return Ok(None),
            Ok(guest) => guest,
            Err(InputError::UnexpectedEof { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        let menu = self.prompt_line(&format!("New menu for {guest}: "))?;
        Ok(Some((guest, menu)))
    }
}
