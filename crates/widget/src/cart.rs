//! Session cart model and storage synchronization.
//!
//! The cart is an ordered list of lines, one per menu item, serialized as
//! JSON into the ephemeral storage key. Malformed stored content is never an
//! error: loading falls back to an empty cart.

use serde::{Deserialize, Serialize};

use sofra_core::{MenuItemId, Price};

use crate::catalog::Catalog;
use crate::storage::KeyValueStorage;

/// One line in the cart: a menu item reference plus a quantity.
///
/// Name and unit price are copied from the catalog at add time, so later
/// catalog changes do not retroactively reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: MenuItemId,
    pub name: String,
    pub unit_price: Price,
    /// Always >= 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// The quantity-times-unit-price total for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The ordered cart contents, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// The cart lines, in the order items were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    fn find_mut(&mut self, id: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}

/// Repository for cart operations over ephemeral storage.
pub struct CartStore<'a> {
    storage: &'a dyn KeyValueStorage,
    key: &'a str,
}

impl<'a> CartStore<'a> {
    /// Create a cart store over the given storage backend and key.
    #[must_use]
    pub const fn new(storage: &'a dyn KeyValueStorage, key: &'a str) -> Self {
        Self { storage, key }
    }

    /// Read the cart from storage.
    ///
    /// An absent or unreadable stored value yields an empty cart; this
    /// never fails.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.storage.get(self.key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!("Stored cart unreadable, starting empty: {e}");
                    Cart::default()
                }
            },
            None => Cart::default(),
        }
    }

    /// Serialize and write the cart to storage.
    pub fn save(&self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(raw) => self.storage.set(self.key, &raw),
            Err(e) => tracing::error!("Failed to serialize cart: {e}"),
        }
    }

    /// Add one unit of a menu item to the cart and persist.
    ///
    /// An existing line for the item is incremented by exactly 1; otherwise
    /// a new quantity-1 line is appended, copying the item's current name
    /// and price. An id not present in the catalog is a silent no-op apart
    /// from re-persisting the unchanged cart.
    pub fn add_item(&self, catalog: &Catalog, id: MenuItemId) -> Cart {
        let mut cart = self.load();
        if let Some(line) = cart.find_mut(id) {
            line.quantity += 1;
        } else if let Some(item) = catalog.find(id) {
            cart.lines.push(CartLine {
                id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            });
        } else {
            tracing::debug!("Ignoring add for unknown menu item {id}");
        }
        self.save(&cart);
        cart
    }

    /// Remove a menu item's line entirely, regardless of quantity, and
    /// persist. A no-op if the item has no line.
    pub fn remove_item(&self, id: MenuItemId) -> Cart {
        let mut cart = self.load();
        cart.lines.retain(|line| line.id != id);
        self.save(&cart);
        cart
    }

    /// Remove the cart's storage entry outright (checkout completion).
    pub fn clear(&self) {
        self.storage.remove(self.key);
    }
}
