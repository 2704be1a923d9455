use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the menu file used when no other path is given.
pub const DEFAULT_MENU_FILE: &str = "menu.txt";

/// Field separator of the menu file.
pub const DELIMITER: char = ',';

/// Errors raised while moving the menu between memory and disk.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Format a price the way it is shown on screen and stored on disk.
///
/// Always keeps a fractional part, so `250.0` prints as `250.0` and not `250`.
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

/// A single purchasable dish. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    name: String,
    price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Case-insensitive comparison used for order lookups.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - TK{}", self.name, format_price(self.price))
    }
}

/// Outcome of a successful [`Menu::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Items appended to the menu.
    pub loaded: usize,
    /// Lines ignored because they were not a valid `name,price` record.
    pub skipped: usize,
}

/// Ordered collection of items maintained by the owner.
///
/// Items are only ever appended; insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item whose name matches `name` ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches_name(name))
    }

    /// Replace the menu contents with the records stored at `path`.
    ///
    /// When the file cannot be read the menu is left untouched. Lines that are
    /// not exactly `name,price`, or whose price does not parse, are skipped.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, MenuError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.items.clear();
        let mut report = LoadReport::default();
        for (line_no, line) in content.lines().enumerate() {
            match parse_record(line) {
                Some(item) => {
                    self.items.push(item);
                    report.loaded += 1;
                }
                None => {
                    if line.is_empty() {
                        debug!(line = line_no + 1, "skipping empty menu line");
                    } else {
                        warn!(line = line_no + 1, content = line, "skipping malformed menu line");
                    }
                    report.skipped += 1;
                }
            }
        }

        info!(path = %path.display(), loaded = report.loaded, skipped = report.skipped, "menu loaded");
        Ok(report)
    }

    /// Overwrite `path` with one `name,price` line per item.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MenuError> {
        let path = path.as_ref();
        let content: String = self
            .items
            .iter()
            .map(|item| format!("{}{}{}\n", item.name, DELIMITER, format_price(item.price)))
            .collect();

        fs::write(path, content).map_err(|source| MenuError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), items = self.items.len(), "menu saved");
        Ok(())
    }
}

/// Parse one line of the menu file.
///
/// Trailing empty fields are dropped before counting, so `Soda,50.0,` still
/// counts as two fields.
fn parse_record(line: &str) -> Option<MenuItem> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    let [name, price] = fields.as_slice() else {
        return None;
    };
    let price = price.trim().parse::<f64>().ok()?;
    Some(MenuItem::new(*name, price))
}
