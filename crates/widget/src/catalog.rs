//! Read-only menu catalog.
//!
//! The catalog is provided by the host at startup and never mutated. The
//! widget only ever looks items up to denormalize their name and price into
//! cart lines.

use serde::{Deserialize, Serialize};

use sofra_core::{Currency, MenuItemId, Price};

/// A single entry on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Illustration shown on the menu card, when the host has one.
    pub image_url: Option<String>,
}

/// The static menu, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Create a catalog from a list of menu items.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// All menu items, in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up a menu item by id.
    #[must_use]
    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The default four-item menu, priced in `currency`.
    #[must_use]
    pub fn default_menu(currency: Currency) -> Self {
        let entry = |id: i32, name: &str, price: i64, description: &str, image: &str| MenuItem {
            id: MenuItemId::new(id),
            name: name.to_owned(),
            price: Price::from_major(price, currency),
            description: description.to_owned(),
            image_url: Some(image.to_owned()),
        };

        Self::new(vec![
            entry(
                1,
                "Hamburger",
                350,
                "Çift kat köfteli.",
                "https://images.unsplash.com/photo-1550547660-d9450f859349?q=80&w=1200&auto=format&fit=crop",
            ),
            entry(
                2,
                "Pizza",
                300,
                "Mantar, mısır, sosis, jambon.",
                "https://images.unsplash.com/photo-1513104890138-7c749659a591?q=80&w=1170&auto=format&fit=crop",
            ),
            entry(
                3,
                "Cheesecake",
                260,
                "Limonlu, frambuazlı.",
                "https://plus.unsplash.com/premium_photo-1722686461601-b2a018a4213b?q=80&w=955&auto=format&fit=crop",
            ),
            entry(
                4,
                "Portakal Suyu",
                125,
                "Taze sıkılmış.",
                "https://images.unsplash.com/photo-1613478223719-2ab802602423?q=80&w=1200&auto=format&fit=crop",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_item() {
        let catalog = Catalog::default_menu(Currency::TRY);
        let item = catalog.find(MenuItemId::new(1)).expect("hamburger exists");
        assert_eq!(item.name, "Hamburger");
        assert_eq!(item.price, Price::from_major(350, Currency::TRY));
    }

    #[test]
    fn test_find_unknown_item() {
        let catalog = Catalog::default_menu(Currency::TRY);
        assert!(catalog.find(MenuItemId::new(99)).is_none());
    }

    #[test]
    fn test_menu_order_is_stable() {
        let catalog = Catalog::default_menu(Currency::TRY);
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Hamburger", "Pizza", "Cheesecake", "Portakal Suyu"]);
    }
}
