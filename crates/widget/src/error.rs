//! Unified error handling.
//!
//! Validation failures are surfaced to the user as inline alerts tied to
//! the screen region that triggered them; nothing here is fatal to the
//! session. Malformed storage never reaches this type - the stores recover
//! locally and log instead.

use thiserror::Error;

use crate::address::AddressError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::view::{AlertLevel, AlertRegion, InlineAlert};

/// Application-level error type for the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Address validation failed.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// A checkout transition was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

impl WidgetError {
    /// The inline alert the UI should render for this error, keyed to the
    /// region that triggered it.
    #[must_use]
    pub fn to_alert(&self) -> InlineAlert {
        match self {
            Self::Config(e) => InlineAlert::new(AlertRegion::Toast, AlertLevel::Danger, e.to_string()),
            Self::Address(e) => {
                let message = match e {
                    AddressError::MissingStreet | AddressError::MissingCity => {
                        "Address details are incomplete. Please fill in the street and city fields."
                    }
                };
                InlineAlert::new(AlertRegion::AddressForm, AlertLevel::Warning, message)
            }
            Self::Checkout(e) => match e {
                CheckoutError::EmptyCart => InlineAlert::new(
                    AlertRegion::Toast,
                    AlertLevel::Warning,
                    "Your cart is empty. Add items before checking out.",
                ),
                CheckoutError::NoAddress => InlineAlert::new(
                    AlertRegion::Checkout,
                    AlertLevel::Danger,
                    "No address found. Enter a delivery address or save one first.",
                ),
                CheckoutError::InvalidCard(_) => InlineAlert::new(
                    AlertRegion::Checkout,
                    AlertLevel::Danger,
                    "Your payment details are missing or invalid. Please check the form.",
                ),
                CheckoutError::NotAwaitingPayment => InlineAlert::new(
                    AlertRegion::Checkout,
                    AlertLevel::Danger,
                    "Checkout is not in progress.",
                ),
            },
        }
    }
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_error_targets_address_form() {
        let alert = WidgetError::from(AddressError::MissingStreet).to_alert();
        assert_eq!(alert.region, AlertRegion::AddressForm);
        assert_eq!(alert.level, AlertLevel::Warning);
    }

    #[test]
    fn test_empty_cart_is_a_toast_warning() {
        let alert = WidgetError::from(CheckoutError::EmptyCart).to_alert();
        assert_eq!(alert.region, AlertRegion::Toast);
        assert_eq!(alert.level, AlertLevel::Warning);
    }

    #[test]
    fn test_checkout_refusals_target_checkout_region() {
        for err in [
            CheckoutError::NoAddress,
            CheckoutError::InvalidCard("cvv"),
            CheckoutError::NotAwaitingPayment,
        ] {
            let alert = WidgetError::from(err).to_alert();
            assert_eq!(alert.region, AlertRegion::Checkout);
            assert_eq!(alert.level, AlertLevel::Danger);
        }
    }

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::from(CheckoutError::NoAddress);
        assert_eq!(err.to_string(), "Checkout error: no delivery address");
    }
}
