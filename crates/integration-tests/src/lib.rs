//! Integration tests for Sofra.
//!
//! Each test builds an isolated in-memory "browsing session" (fresh
//! session storage, local storage, and cookie jar) and drives the widget
//! through the same action sequence a user would.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart accumulation, removal, and totals
//! - `address_book` - Address validation and persistence
//! - `checkout_flow` - The full checkout state machine
//! - `consent_memory` - Cookie consent and payment-method prefill

use sofra_core::Currency;
use sofra_widget::catalog::Catalog;
use sofra_widget::config::WidgetConfig;
use sofra_widget::{AppState, Widget};

/// A widget over one fresh, isolated in-memory session, using the default
/// configuration and menu.
#[must_use]
pub fn fresh_session() -> Widget {
    let config = WidgetConfig::default();
    let catalog = Catalog::default_menu(Currency::TRY);
    Widget::new(AppState::in_memory(config, catalog))
}
