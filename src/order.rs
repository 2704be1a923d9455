use crate::menu::{Menu, MenuItem};

/// A customer's pending selection, stored as positions in the [`Menu`].
///
/// The same menu item may appear any number of times. The total is never
/// cached; it is summed from the menu each time it is asked for.
#[derive(Debug, Clone, Default)]
pub struct Order {
    entries: Vec<usize>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the menu item at `index`.
    pub fn add(&mut self, index: usize) {
        self.entries.push(index);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolve the entries against `menu`, in the order they were added.
    ///
    /// Menus only grow, so every stored index stays valid for the menu the
    /// order was built from.
    pub fn items<'a>(&'a self, menu: &'a Menu) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.entries.iter().filter_map(move |&index| menu.get(index))
    }

    /// Sum of the prices of every entry; `0.0` for an empty order.
    pub fn total(&self, menu: &Menu) -> f64 {
        self.items(menu).map(MenuItem::price).sum()
    }
}
