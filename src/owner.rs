use crate::app::{CHOICE_PROMPT, FlowEnd, INVALID_CHOICE, parse_choice, write_menu};
use crate::io_adapters::LineSource;
use crate::menu::{Menu, MenuItem};
use anyhow::Result;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OwnerChoice {
    AddItem,
    ViewMenu,
    Logout,
}

impl OwnerChoice {
    fn parse(input: &str) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(Self::AddItem),
            2 => Some(Self::ViewMenu),
            3 => Some(Self::Logout),
            _ => None,
        }
    }
}

/// Owner session: add items to the menu and look at it until logout.
pub(crate) fn run(menu: &mut Menu, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<FlowEnd> {
    loop {
        writeln!(out)?;
        writeln!(out, "--- Owner Menu ---")?;
        writeln!(out, "1. Add Item to Menu")?;
        writeln!(out, "2. View Menu")?;
        writeln!(out, "3. Logout")?;

        let Some(line) = input.read_line(CHOICE_PROMPT)? else {
            return Ok(FlowEnd::InputClosed);
        };

        match OwnerChoice::parse(&line) {
            Some(OwnerChoice::AddItem) => {
                if !add_item(menu, input, out)? {
                    return Ok(FlowEnd::InputClosed);
                }
            }
            Some(OwnerChoice::ViewMenu) => write_menu(menu, out)?,
            Some(OwnerChoice::Logout) => {
                writeln!(out, "Logged out of owner account.")?;
                return Ok(FlowEnd::Logout);
            }
            None => writeln!(out, "{INVALID_CHOICE}")?,
        }
    }
}

/// Returns `false` when the input closed before both answers were read.
fn add_item(menu: &mut Menu, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<bool> {
    let Some(name) = input.read_line("Enter item name: ")? else {
        return Ok(false);
    };
    let Some(price) = input.read_line("Enter item price: ")? else {
        return Ok(false);
    };

    match price.trim().parse::<f64>() {
        Ok(price) => {
            let item = MenuItem::new(name, price);
            writeln!(out, "Item added to the menu: {item}")?;
            info!(name = item.name(), price = item.price(), "menu item added");
            menu.add(item);
        }
        Err(_) => writeln!(out, "Invalid price. Item not added.")?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedSource;

    fn drive(menu: &mut Menu, lines: &[&str]) -> (FlowEnd, String) {
        let mut input = ScriptedSource::from_lines(lines);
        let mut out = Vec::new();
        let end = run(menu, &mut input, &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_view_empty_menu_then_add_and_view() {
        let mut menu = Menu::new();
        let (end, out) = drive(&mut menu, &["2", "1", "Pizza", "250", "2", "3"]);

        assert_eq!(end, FlowEnd::Logout);
        assert!(out.contains("--- Menu ---\nNo items in the menu.\n"));
        assert!(out.contains("Item added to the menu: Pizza - TK250.0\n"));
        assert!(out.contains("--- Menu ---\nPizza - TK250.0\n"));
        assert!(out.ends_with("Logged out of owner account.\n"));
        assert_eq!(menu.items(), &[MenuItem::new("Pizza", 250.0)]);
    }

    #[test]
    fn test_invalid_price_is_reported_and_not_added() {
        let mut menu = Menu::new();
        let (_, out) = drive(&mut menu, &["1", "Pizza", "cheap", "3"]);

        assert!(out.contains("Invalid price. Item not added.\n"));
        assert!(menu.is_empty());
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut menu = Menu::new();
        let (end, out) = drive(&mut menu, &["7", "abc", "3"]);

        assert_eq!(end, FlowEnd::Logout);
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("--- Owner Menu ---").count(), 3);
    }

    #[test]
    fn test_closed_input_mid_add_ends_flow() {
        let mut menu = Menu::new();
        let (end, _) = drive(&mut menu, &["1", "Pizza"]);

        assert_eq!(end, FlowEnd::InputClosed);
        assert!(menu.is_empty());
    }
}
