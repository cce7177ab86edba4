//! Order total computation.
//!
//! `compute_totals` is a pure function of the cart contents and the
//! configured delivery fee; nothing here is persisted.

use rust_decimal::Decimal;

use sofra_core::{Currency, Price};

use crate::cart::Cart;

/// Derived order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of quantity × unit price over all lines.
    pub subtotal: Price,
    /// The flat fee, or zero for an empty cart.
    pub delivery_fee: Price,
    /// Subtotal plus delivery fee.
    pub total: Price,
}

/// Compute subtotal, delivery fee, and total for a cart.
///
/// The delivery fee is charged only when the cart has at least one line.
#[must_use]
pub fn compute_totals(cart: &Cart, delivery_fee: Decimal, currency: Currency) -> Totals {
    let subtotal = cart
        .lines()
        .iter()
        .fold(Price::zero(currency), |acc, line| acc.plus(line.line_total()));

    let delivery_fee = if cart.is_empty() {
        Price::zero(currency)
    } else {
        Price::new(delivery_fee, currency)
    };

    Totals {
        subtotal,
        delivery_fee,
        total: subtotal.plus(delivery_fee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStorage;
    use sofra_core::MenuItemId;

    fn fee() -> Decimal {
        Decimal::new(4500, 2)
    }

    fn cart_with(ids: &[i32]) -> Cart {
        let storage = MemoryStorage::new();
        let catalog = Catalog::default_menu(Currency::TRY);
        let store = CartStore::new(&storage, "cart");
        let mut cart = Cart::default();
        for id in ids {
            cart = store.add_item(&catalog, MenuItemId::new(*id));
        }
        cart
    }

    #[test]
    fn test_empty_cart_charges_no_fee() {
        let totals = compute_totals(&Cart::default(), fee(), Currency::TRY);
        assert_eq!(totals.subtotal, Price::zero(Currency::TRY));
        assert_eq!(totals.delivery_fee, Price::zero(Currency::TRY));
        assert_eq!(totals.total, Price::zero(Currency::TRY));
    }

    #[test]
    fn test_single_item_total_includes_fee() {
        let totals = compute_totals(&cart_with(&[1]), fee(), Currency::TRY);
        assert_eq!(totals.subtotal, Price::from_major(350, Currency::TRY));
        assert_eq!(totals.total.amount, Decimal::new(39500, 2));
    }

    #[test]
    fn test_quantity_accumulates_into_subtotal() {
        let totals = compute_totals(&cart_with(&[1, 1]), fee(), Currency::TRY);
        assert_eq!(totals.subtotal, Price::from_major(700, Currency::TRY));
        assert_eq!(totals.total.amount, Decimal::new(74500, 2));
    }

    #[test]
    fn test_mixed_cart_subtotal() {
        // Hamburger 350 + 2x Portakal Suyu 125 = 600, total 645
        let totals = compute_totals(&cart_with(&[1, 4, 4]), fee(), Currency::TRY);
        assert_eq!(totals.subtotal, Price::from_major(600, Currency::TRY));
        assert_eq!(totals.total, Price::from_major(645, Currency::TRY));
    }

    #[test]
    fn test_compute_totals_is_pure() {
        let cart = cart_with(&[1, 2]);
        let first = compute_totals(&cart, fee(), Currency::TRY);
        let second = compute_totals(&cart, fee(), Currency::TRY);
        assert_eq!(first, second);
    }
}
