//! Interactive text menu over a [`Catalog`].
//!
//! [`Menu::dispatch`] runs a single command to completion and reports whether
//! the session should continue; [`Menu::run`] drives it until the user exits
//! or input runs out. Input and output are generic so sessions can be
//! scripted.

use crate::{Catalog, Config, Error, Result};
use std::io::{BufRead, Write};

/// A menu action chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddBook,
    FindBook,
    PopularBooks,
    Exit,
}

impl Command {
    /// Parse a menu choice (`1`-`4`). Anything else is not a command.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Command::AddBook),
            2 => Some(Command::FindBook),
            3 => Some(Command::PopularBooks),
            4 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Whether the session continues after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Presentation settings for the menu
#[derive(Clone, Debug)]
pub struct MenuSettings {
    pub store_name: String,
    pub currency_symbol: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        MenuSettings::from(&Config::default())
    }
}

impl From<&Config> for MenuSettings {
    fn from(config: &Config) -> Self {
        Self {
            store_name: config.store.name.clone(),
            currency_symbol: config.display.currency_symbol.clone(),
        }
    }
}

/// A menu session reading from `R` and printing to `W`
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
    settings: MenuSettings,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W, settings: MenuSettings) -> Self {
        Self {
            catalog,
            input,
            output,
            settings,
        }
    }

    /// Show the menu and dispatch choices until exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed at menu prompt, ending session");
                return Ok(());
            };

            let flow = match Command::from_choice(&choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    tracing::debug!("Invalid menu choice {:?}", choice);
                    writeln!(self.output, "Invalid choice. Please try again.\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Run one command
    ///
    /// Unparseable numbers are reported to the user and the session carries
    /// on; I/O failures are returned.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!("Dispatching {:?}", command);

        let result = match command {
            Command::AddBook => self.add_book(),
            Command::FindBook => self.find_book(),
            Command::PopularBooks => self.popular_books(),
            Command::Exit => {
                writeln!(self.output, "Exiting program.")?;
                Ok(Flow::Exit)
            }
        };

        match result {
            Err(e) if e.is_recoverable() => {
                tracing::warn!("{}", e);
                writeln!(self.output, "{}. Returning to menu.\n", e)?;
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(category) = self.prompt("Enter book category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Enter price: ")? else {
            return Ok(Flow::Exit);
        };
        let price: f64 = parse_number("price", &price)?;

        self.catalog.add_book(&category, &title, &author, price);
        writeln!(self.output, "Book added successfully!\n")?;
        Ok(Flow::Continue)
    }

    fn find_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter book title to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.catalog.find_book(&title) {
            Some(book) => {
                let line = book.display_with_currency(&self.settings.currency_symbol);
                writeln!(self.output, "Book found:\n{}\n", line)?;
            }
            None => writeln!(self.output, "Book not found.\n")?,
        }
        Ok(Flow::Continue)
    }

    fn popular_books(&mut self) -> Result<Flow> {
        let Some(count) = self.prompt("Enter the number of popular books to display: ")? else {
            return Ok(Flow::Exit);
        };
        let count: i64 = parse_number("count", &count)?;
        // Negative counts behave like zero
        let count = usize::try_from(count).unwrap_or(0);

        let books = self.catalog.popular_books(count);
        writeln!(self.output, "Popular Books:")?;
        for book in &books {
            writeln!(
                self.output,
                "{}",
                book.display_with_currency(&self.settings.currency_symbol)
            )?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{} Menu:", self.settings.store_name)?;
        writeln!(self.output, "1. Add a Book")?;
        writeln!(self.output, "2. Search for a Book")?;
        writeln!(self.output, "3. Display Popular Books")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, input: &str) -> Result<T> {
    input.trim().parse().map_err(|_| Error::Parse {
        field,
        input: input.to_string(),
    })
}
