use crate::app::{CHOICE_PROMPT, FlowEnd, INVALID_CHOICE, NO_MENU_ITEMS, parse_choice, write_menu};
use crate::io_adapters::LineSource;
use crate::menu::{Menu, format_price};
use crate::order::Order;
use anyhow::Result;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomerChoice {
    ViewMenu,
    AddToOrder,
    ViewOrder,
    PlaceOrder,
    Logout,
}

impl CustomerChoice {
    fn parse(input: &str) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(Self::ViewMenu),
            2 => Some(Self::AddToOrder),
            3 => Some(Self::ViewOrder),
            4 => Some(Self::PlaceOrder),
            5 => Some(Self::Logout),
            _ => None,
        }
    }
}

/// Customer session. The order lives only as long as this call.
pub(crate) fn run(menu: &Menu, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<FlowEnd> {
    let mut order = Order::new();

    loop {
        writeln!(out)?;
        writeln!(out, "--- Customer Menu ---")?;
        writeln!(out, "1. View Menu")?;
        writeln!(out, "2. Add Item to Order")?;
        writeln!(out, "3. View Order")?;
        writeln!(out, "4. Place Order")?;
        writeln!(out, "5. Logout")?;

        let Some(line) = input.read_line(CHOICE_PROMPT)? else {
            return Ok(FlowEnd::InputClosed);
        };

        match CustomerChoice::parse(&line) {
            Some(CustomerChoice::ViewMenu) => write_menu(menu, out)?,
            Some(CustomerChoice::AddToOrder) => {
                if menu.is_empty() {
                    writeln!(out, "{NO_MENU_ITEMS}")?;
                    continue;
                }
                let Some(name) = input.read_line("Enter item name to add to order: ")? else {
                    return Ok(FlowEnd::InputClosed);
                };
                match menu.find_by_name(&name) {
                    Some(index) => {
                        order.add(index);
                        if let Some(item) = menu.get(index) {
                            writeln!(out, "Item added to order: {item}")?;
                        }
                    }
                    None => writeln!(out, "Invalid item name.")?,
                }
            }
            Some(CustomerChoice::ViewOrder) => write_order(menu, &order, out)?,
            Some(CustomerChoice::PlaceOrder) => {
                if order.is_empty() {
                    writeln!(out, "No items in the order. Cannot place an empty order.")?;
                    continue;
                }
                let total = order.total(menu);
                writeln!(out, "Order placed! Total amount: TK{}", format_price(total))?;
                info!(items = order.len(), total, "order placed");
                order.clear();
            }
            Some(CustomerChoice::Logout) => {
                writeln!(out, "Logged out of customer account.")?;
                return Ok(FlowEnd::Logout);
            }
            None => writeln!(out, "{INVALID_CHOICE}")?,
        }
    }
}

fn write_order(menu: &Menu, order: &Order, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Order ---")?;
    if order.is_empty() {
        writeln!(out, "No items in the order.")?;
        return Ok(());
    }
    for item in order.items(menu) {
        writeln!(out, "{item}")?;
    }
    writeln!(out, "Total: TK{}", format_price(order.total(menu)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedSource;
    use crate::menu::MenuItem;

    fn menu() -> Menu {
        let mut menu = Menu::new();
        menu.add(MenuItem::new("Pizza", 250.0));
        menu.add(MenuItem::new("Soda", 50.0));
        menu
    }

    fn drive(menu: &Menu, lines: &[&str]) -> (FlowEnd, String) {
        let mut input = ScriptedSource::from_lines(lines);
        let mut out = Vec::new();
        let end = run(menu, &mut input, &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_order_view_and_place() {
        let menu = menu();
        let (end, out) = drive(&menu, &["2", "pizza", "2", "Soda", "3", "4", "3", "5"]);

        assert_eq!(end, FlowEnd::Logout);
        assert!(out.contains("Item added to order: Pizza - TK250.0\n"));
        assert!(out.contains("Item added to order: Soda - TK50.0\n"));
        assert!(out.contains("--- Order ---\nPizza - TK250.0\nSoda - TK50.0\nTotal: TK300.0\n"));
        assert!(out.contains("Order placed! Total amount: TK300.0\n"));

        let after_place = out.split("Order placed!").nth(1).unwrap();
        assert!(after_place.contains("--- Order ---\nNo items in the order.\n"));
        assert!(out.ends_with("Logged out of customer account.\n"));
    }

    #[test]
    fn test_same_item_can_be_added_repeatedly() {
        let menu = menu();
        let (_, out) = drive(&menu, &["2", "SODA", "2", "soda", "3", "5"]);

        assert!(out.contains("Soda - TK50.0\nSoda - TK50.0\nTotal: TK100.0\n"));
    }

    #[test]
    fn test_unknown_item_name_is_rejected() {
        let menu = menu();
        let (_, out) = drive(&menu, &["2", "Burger", "3", "5"]);

        assert!(out.contains("Invalid item name.\n"));
        assert!(out.contains("No items in the order.\n"));
    }

    #[test]
    fn test_empty_menu_blocks_add_without_prompting() {
        let menu = Menu::new();
        let (end, out) = drive(&menu, &["2", "1", "5"]);

        assert_eq!(end, FlowEnd::Logout);
        assert_eq!(out.matches("No items in the menu.").count(), 2);
        assert!(!out.contains("Invalid choice"));
    }

    #[test]
    fn test_place_empty_order_is_refused() {
        let menu = menu();
        let (_, out) = drive(&menu, &["4", "5"]);

        assert!(out.contains("No items in the order. Cannot place an empty order.\n"));
        assert!(!out.contains("Order placed!"));
    }

    #[test]
    fn test_order_is_dropped_on_logout() {
        let menu = menu();
        let mut input = ScriptedSource::from_lines(["2", "Pizza", "5", "3", "5"]);
        let mut out = Vec::new();

        assert_eq!(run(&menu, &mut input, &mut out).unwrap(), FlowEnd::Logout);
        assert_eq!(run(&menu, &mut input, &mut out).unwrap(), FlowEnd::Logout);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("--- Order ---\nNo items in the order.\n"));
    }

    #[test]
    fn test_invalid_choice_and_closed_input() {
        let menu = menu();
        let (end, out) = drive(&menu, &["9"]);

        assert_eq!(end, FlowEnd::InputClosed);
        assert!(out.contains("Invalid choice. Please try again.\n"));
    }
}
