use crate::auth::{Authenticator, FixedCredentials, Role};
use crate::io_adapters::LineSource;
use crate::menu::{DEFAULT_MENU_FILE, Menu};
use crate::{customer, owner};
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub(crate) const CHOICE_PROMPT: &str = "Enter your choice: ";
pub(crate) const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub(crate) const NO_MENU_ITEMS: &str = "No items in the menu.";

/// How a role flow handed control back to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowEnd {
    Logout,
    InputClosed,
}

/// How [`App::run`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user picked Exit; the menu was written back to disk (or the
    /// failure was reported).
    Exited,
    /// Input ran out before Exit was chosen. Menu changes were not saved.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    OwnerLogin,
    CustomerLogin,
    Exit,
}

impl MainChoice {
    fn parse(input: &str) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(Self::OwnerLogin),
            2 => Some(Self::CustomerLogin),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Numeric menu selection, surrounding whitespace ignored.
pub(crate) fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Print the menu section shared by both roles.
pub(crate) fn write_menu(menu: &Menu, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Menu ---")?;
    if menu.is_empty() {
        writeln!(out, "{NO_MENU_ITEMS}")?;
    } else {
        for item in menu.items() {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

/// The food ordering console.
///
/// Owns the menu for the lifetime of the process and lends it to the owner
/// and customer flows. The menu file is read when [`App::run`] starts and
/// written only when the user picks Exit.
///
/// Example
/// ```
/// use food_ordering::{App, RunOutcome, ScriptedSource};
///
/// let dir = std::env::temp_dir().join(format!("food_ordering_doc_{}", std::process::id()));
/// std::fs::create_dir_all(&dir).unwrap();
/// let path = dir.join("menu.txt");
///
/// let mut app = App::new(&path);
/// let mut input = ScriptedSource::from_lines(["1", "admin", "admin123", "1", "Tea", "15", "3", "3"]);
/// let mut out = Vec::new();
/// assert_eq!(app.run(&mut input, &mut out).unwrap(), RunOutcome::Exited);
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "Tea,15.0\n");
/// # std::fs::remove_dir_all(&dir).unwrap();
/// ```
pub struct App<A = FixedCredentials> {
    menu: Menu,
    auth: A,
    menu_path: PathBuf,
}

impl App<FixedCredentials> {
    /// Application with the built-in accounts, persisting to `menu_path`.
    pub fn new(menu_path: impl Into<PathBuf>) -> Self {
        Self::with_authenticator(menu_path, FixedCredentials::default())
    }
}

impl Default for App<FixedCredentials> {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_FILE)
    }
}

impl<A: Authenticator> App<A> {
    pub fn with_authenticator(menu_path: impl Into<PathBuf>, auth: A) -> Self {
        Self {
            menu: Menu::new(),
            auth,
            menu_path: menu_path.into(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_path(&self) -> &Path {
        &self.menu_path
    }

    /// Load the menu file, reporting the result on `out`. Never fails on a
    /// missing or unreadable file.
    pub fn load_menu(&mut self, out: &mut dyn Write) -> Result<()> {
        match self.menu.load(&self.menu_path) {
            Ok(_) => writeln!(out, "Menu loaded from {}", self.menu_path.display())?,
            Err(err) => {
                warn!(error = %err, "menu not loaded");
                writeln!(out, "Failed to load menu from file: {err}")?;
            }
        }
        Ok(())
    }

    /// Save the menu file, reporting the result on `out`.
    pub fn save_menu(&self, out: &mut dyn Write) -> Result<()> {
        match self.menu.save(&self.menu_path) {
            Ok(()) => writeln!(out, "Menu saved to {}", self.menu_path.display())?,
            Err(err) => {
                warn!(error = %err, "menu not saved");
                writeln!(out, "Failed to save menu to file: {err}")?;
            }
        }
        Ok(())
    }

    /// Run the whole console session: load, main menu loop, save on Exit.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<RunOutcome> {
        self.load_menu(out)?;

        loop {
            writeln!(out, "Welcome to the Food Ordering System!")?;
            writeln!(out, "1. Owner Login")?;
            writeln!(out, "2. Customer Login")?;
            writeln!(out, "3. Exit")?;

            let Some(line) = input.read_line(CHOICE_PROMPT)? else {
                return Ok(RunOutcome::InputClosed);
            };

            let end = match MainChoice::parse(&line) {
                Some(MainChoice::OwnerLogin) => match self.login(Role::Owner, input, out)? {
                    Some(true) => owner::run(&mut self.menu, input, out)?,
                    Some(false) => FlowEnd::Logout,
                    None => FlowEnd::InputClosed,
                },
                Some(MainChoice::CustomerLogin) => match self.login(Role::Customer, input, out)? {
                    Some(true) => customer::run(&self.menu, input, out)?,
                    Some(false) => FlowEnd::Logout,
                    None => FlowEnd::InputClosed,
                },
                Some(MainChoice::Exit) => {
                    self.save_menu(out)?;
                    writeln!(out, "Thank you for using the Food Ordering System. Goodbye!")?;
                    return Ok(RunOutcome::Exited);
                }
                None => {
                    debug!(input = %line, "unrecognised main menu choice");
                    writeln!(out, "{INVALID_CHOICE}")?;
                    FlowEnd::Logout
                }
            };

            if end == FlowEnd::InputClosed {
                return Ok(RunOutcome::InputClosed);
            }
        }
    }

    /// Ask for credentials. `None` when the input closed mid-way.
    fn login(&self, role: Role, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<Option<bool>> {
        let Some(username) = input.read_line("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = input.read_line("Enter password: ")? else {
            return Ok(None);
        };

        let ok = self.auth.verify(role, &username, &password);
        if !ok {
            writeln!(out, "Invalid username or password!")?;
        }
        Ok(Some(ok))
    }
}
