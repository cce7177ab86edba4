//! Pure view-model projection.
//!
//! Everything here is a function from domain state to display data; the UI
//! toolkit renders these without reading the stores itself, which keeps the
//! core testable without any UI harness.

use sofra_core::MenuItemId;

use crate::address::Address;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::PaymentMethod;
use crate::pricing::Totals;

/// Severity of an inline alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Warning,
    Danger,
}

/// The named screen region an alert is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertRegion {
    /// The address form's alert area.
    AddressForm,
    /// The checkout screen's alert area.
    Checkout,
    /// The transient toast shown outside any form.
    Toast,
}

/// A dismissible message for a named alert region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAlert {
    pub region: AlertRegion,
    pub level: AlertLevel,
    pub message: String,
}

impl InlineAlert {
    /// Build an alert.
    #[must_use]
    pub fn new(region: AlertRegion, level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            region,
            level,
            message: message.into(),
        }
    }
}

/// Menu card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
}

/// Project the catalog into menu cards.
#[must_use]
pub fn menu_view(catalog: &Catalog) -> Vec<MenuItemView> {
    catalog
        .items()
        .iter()
        .map(|item| MenuItemView {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.display(),
            image_url: item.image_url.clone(),
        })
        .collect()
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data, totals included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
    /// Total item count for the badge indicator.
    pub item_count: u32,
}

impl CartView {
    /// Whether the empty-cart message should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Project the cart and its computed totals into display data.
#[must_use]
pub fn cart_view(cart: &Cart, totals: &Totals) -> CartView {
    CartView {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                id: line.id,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price.display(),
                line_total: line.line_total().display(),
            })
            .collect(),
        subtotal: totals.subtotal.display(),
        delivery_fee: totals.delivery_fee.display(),
        total: totals.total.display(),
        item_count: cart.item_count(),
    }
}

/// Result of a successful address save: the refreshed summary line plus the
/// confirmation alert for the address form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSavedView {
    pub summary: String,
    pub alert: InlineAlert,
}

/// Result of a completed payment: the emptied cart plus the confirmation
/// toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlacedView {
    pub cart: CartView,
    pub alert: InlineAlert,
}

/// Saved-address summary text (e.g., "Saved: Home – Bağdat Cad. İstanbul").
#[must_use]
pub fn address_summary(address: Option<&Address>) -> String {
    address.map_or_else(
        || "Saved: (none)".to_owned(),
        |addr| format!("Saved: {}", addr.summary()),
    )
}

/// Checkout screen display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
    /// Saved-address line shown on the screen ("No saved address" when absent).
    pub address_display: String,
    /// Prefill for the ad-hoc address input.
    pub address_line_prefill: String,
    /// Remembered payment method to preselect, when consent allows.
    pub method_prefill: Option<PaymentMethod>,
}

/// Project the checkout screen from totals, saved address, and remembered
/// payment method.
#[must_use]
pub fn checkout_view(
    totals: &Totals,
    saved_address: Option<&Address>,
    method_prefill: Option<PaymentMethod>,
) -> CheckoutView {
    let (address_display, address_line_prefill) = saved_address.map_or_else(
        || ("No saved address".to_owned(), String::new()),
        |addr| (addr.summary(), addr.single_line()),
    );

    CheckoutView {
        subtotal: totals.subtotal.display(),
        delivery_fee: totals.delivery_fee.display(),
        total: totals.total.display(),
        address_display,
        address_line_prefill,
        method_prefill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::pricing::compute_totals;
    use crate::storage::MemoryStorage;
    use rust_decimal::Decimal;
    use sofra_core::Currency;

    fn totals_for(cart: &Cart) -> Totals {
        compute_totals(cart, Decimal::new(4500, 2), Currency::TRY)
    }

    #[test]
    fn test_menu_view_formats_prices() {
        let catalog = Catalog::default_menu(Currency::TRY);
        let view = menu_view(&catalog);
        assert_eq!(view.len(), 4);
        assert_eq!(view.first().map(|v| v.price.as_str()), Some("350.00 ₺"));
    }

    #[test]
    fn test_cart_view_line_totals_and_badge() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::default_menu(Currency::TRY);
        let store = CartStore::new(&storage, "cart");
        store.add_item(&catalog, MenuItemId::new(4));
        let cart = store.add_item(&catalog, MenuItemId::new(4));

        let view = cart_view(&cart, &totals_for(&cart));
        assert_eq!(view.item_count, 2);
        let line = view.lines.first().expect("one line");
        assert_eq!(line.unit_price, "125.00 ₺");
        assert_eq!(line.line_total, "250.00 ₺");
        assert_eq!(view.subtotal, "250.00 ₺");
        assert_eq!(view.delivery_fee, "45.00 ₺");
        assert_eq!(view.total, "295.00 ₺");
    }

    #[test]
    fn test_empty_cart_view() {
        let cart = Cart::default();
        let view = cart_view(&cart, &totals_for(&cart));
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.delivery_fee, "0.00 ₺");
        assert_eq!(view.total, "0.00 ₺");
    }

    #[test]
    fn test_address_summary_texts() {
        assert_eq!(address_summary(None), "Saved: (none)");

        let addr = Address::new("Home", "Bağdat Cad.", "İstanbul").expect("valid");
        assert_eq!(
            address_summary(Some(&addr)),
            "Saved: Home – Bağdat Cad. İstanbul"
        );
    }

    #[test]
    fn test_checkout_view_prefills_saved_address() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::default_menu(Currency::TRY);
        let cart = CartStore::new(&storage, "cart").add_item(&catalog, MenuItemId::new(1));
        let addr = Address::new("", "Bağdat Cad.", "İstanbul").expect("valid");

        let view = checkout_view(&totals_for(&cart), Some(&addr), Some(PaymentMethod::Door));
        assert_eq!(view.address_display, "Address – Bağdat Cad. İstanbul");
        assert_eq!(view.address_line_prefill, "Bağdat Cad. İstanbul");
        assert_eq!(view.method_prefill, Some(PaymentMethod::Door));
        assert_eq!(view.total, "395.00 ₺");
    }

    #[test]
    fn test_checkout_view_without_saved_address() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::default_menu(Currency::TRY);
        let cart = CartStore::new(&storage, "cart").add_item(&catalog, MenuItemId::new(2));

        let view = checkout_view(&totals_for(&cart), None, None);
        assert_eq!(view.address_display, "No saved address");
        assert_eq!(view.address_line_prefill, "");
        assert_eq!(view.method_prefill, None);
    }
}
