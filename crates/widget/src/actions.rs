//! The UI action surface.
//!
//! [`Widget`] is the single entry point the surrounding UI calls in
//! response to user actions. Every action returns fresh view models (or a
//! [`WidgetError`](crate::error::WidgetError) the UI maps to an inline alert via
//! [`WidgetError::to_alert`](crate::error::WidgetError::to_alert)), so the UI re-renders from the returned data
//! and never reads the stores directly.

use tracing::instrument;

use sofra_core::MenuItemId;

use crate::checkout::{CheckoutFlow, CheckoutState, PaymentMethod, PaymentRequest};
use crate::error::Result;
use crate::pricing::{Totals, compute_totals};
use crate::state::AppState;
use crate::view::{
    AddressSavedView, AlertLevel, AlertRegion, CartView, CheckoutView, InlineAlert, MenuItemView,
    OrderPlacedView, address_summary, cart_view, checkout_view, menu_view,
};

/// The ordering widget: application state plus the current checkout flow.
pub struct Widget {
    state: AppState,
    checkout: CheckoutFlow,
}

impl Widget {
    /// Create a widget over prepared application state.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
            checkout: CheckoutFlow::new(),
        }
    }

    fn totals(&self) -> Totals {
        let cart = self.state.cart_store().load();
        compute_totals(
            &cart,
            self.state.config().delivery_fee,
            self.state.config().currency,
        )
    }

    fn current_cart_view(&self) -> CartView {
        let cart = self.state.cart_store().load();
        let totals = compute_totals(
            &cart,
            self.state.config().delivery_fee,
            self.state.config().currency,
        );
        cart_view(&cart, &totals)
    }

    /// The menu cards to render.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItemView> {
        menu_view(self.state.catalog())
    }

    /// The current cart with computed totals.
    #[must_use]
    pub fn cart(&self) -> CartView {
        self.current_cart_view()
    }

    /// The saved-address summary text for the address form.
    #[must_use]
    pub fn address_info(&self) -> String {
        address_summary(self.state.address_book().load().as_ref())
    }

    /// Add one unit of a menu item; returns the re-rendered cart.
    #[instrument(skip(self))]
    pub fn add_item(&self, id: MenuItemId) -> CartView {
        let cart = self.state.cart_store().add_item(self.state.catalog(), id);
        let totals = compute_totals(
            &cart,
            self.state.config().delivery_fee,
            self.state.config().currency,
        );
        cart_view(&cart, &totals)
    }

    /// Remove a menu item's line entirely; returns the re-rendered cart.
    #[instrument(skip(self))]
    pub fn remove_item(&self, id: MenuItemId) -> CartView {
        let cart = self.state.cart_store().remove_item(id);
        let totals = compute_totals(
            &cart,
            self.state.config().delivery_fee,
            self.state.config().currency,
        );
        cart_view(&cart, &totals)
    }

    /// Save the delivery address; returns the updated summary text along
    /// with the confirmation alert for the form.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError::Address`](crate::error::WidgetError::Address) when street or city is empty; the
    /// stored address is left unchanged.
    #[instrument(skip(self, title, street, city))]
    pub fn save_address(&self, title: &str, street: &str, city: &str) -> Result<AddressSavedView> {
        let address = self.state.address_book().save(title, street, city)?;
        Ok(AddressSavedView {
            summary: address_summary(Some(&address)),
            alert: InlineAlert::new(
                AlertRegion::AddressForm,
                AlertLevel::Success,
                "Address saved.",
            ),
        })
    }

    /// Begin checkout; returns the checkout screen view.
    ///
    /// # Errors
    ///
    /// Refused with [`WidgetError::Checkout`](crate::error::WidgetError::Checkout) when the cart is empty.
    #[instrument(skip(self))]
    pub fn begin_checkout(&mut self) -> Result<CheckoutView> {
        let cart = self.state.cart_store().load();
        self.checkout.begin(&cart)?;

        let totals = self.totals();
        let saved = self.state.address_book().load();
        let method_prefill = self.state.consent().recall_payment_method();
        Ok(checkout_view(&totals, saved.as_ref(), method_prefill))
    }

    /// Confirm payment; on success the cart storage entry is removed, the
    /// chosen method is remembered when consent allows, and the emptied
    /// cart view is returned alongside the success toast.
    ///
    /// # Errors
    ///
    /// Refused with [`WidgetError::Checkout`](crate::error::WidgetError::Checkout) when no address resolves or
    /// the card details fail validation; cart and state are unchanged.
    #[instrument(skip(self, request))]
    pub fn confirm_payment(&mut self, request: &PaymentRequest) -> Result<OrderPlacedView> {
        let saved = self.state.address_book().load();
        self.checkout.confirm(request, saved.as_ref())?;

        self.state.consent().remember_payment_method(request.method);
        self.state.cart_store().clear();
        tracing::info!(method = %request.method, "Order completed");
        Ok(OrderPlacedView {
            cart: self.current_cart_view(),
            alert: InlineAlert::new(
                AlertRegion::Toast,
                AlertLevel::Success,
                "Your order has been placed.",
            ),
        })
    }

    /// Cancel the checkout and close its screen; no other side effects.
    #[instrument(skip(self))]
    pub fn cancel_checkout(&mut self) {
        self.checkout.cancel();
    }

    /// The checkout flow's current state.
    #[must_use]
    pub const fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    /// Record the payment method selected on the checkout screen, so it is
    /// remembered across visits when consent allows.
    #[instrument(skip(self))]
    pub fn select_payment_method(&self, method: PaymentMethod) {
        self.state.consent().remember_payment_method(method);
    }

    /// Accept preference cookies; the current method is remembered at once
    /// and the confirmation toast is returned.
    #[instrument(skip(self))]
    pub fn accept_consent(&self, current_method: PaymentMethod) -> InlineAlert {
        self.state.consent().accept(current_method);
        InlineAlert::new(AlertRegion::Toast, AlertLevel::Success, "Preferences saved.")
    }

    /// Reject preference cookies; any remembered method is erased.
    #[instrument(skip(self))]
    pub fn reject_consent(&self) {
        self.state.consent().reject();
    }

    /// The underlying application state, for hosts that need direct store
    /// access (e.g., rendering the address form on startup).
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}
