//! Checkout state machine.
//!
//! Idle → ReviewingOrder → AwaitingPayment → Completed, with cancellation
//! back to Idle from AwaitingPayment. The review step is implicit in this
//! flow: the checkout screen itself collects the payment method, so `begin`
//! lands directly in AwaitingPayment. The flow object holds no store
//! references; side effects (clearing the cart, remembering the payment
//! method) belong to the action surface driving it.

use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::Address;
use crate::cart::Cart;

/// Errors refusing a checkout transition. The refused transition leaves
/// the machine state unchanged; the user may correct input and retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout cannot begin with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
    /// No ad-hoc address line and no usable saved address.
    #[error("no delivery address")]
    NoAddress,
    /// A card field is missing or fails basic validity.
    #[error("invalid payment details: {0}")]
    InvalidCard(&'static str),
    /// Confirm or cancel called outside `AwaitingPayment`.
    #[error("checkout is not awaiting payment")]
    NotAwaitingPayment,
}

/// Checkout progress for one checkout instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    #[default]
    Idle,
    /// The review step. `begin` passes through it without pausing (the
    /// checkout screen doubles as the review), so the flow never rests
    /// here; hosts with a separate review screen may.
    ReviewingOrder,
    AwaitingPayment,
    Completed,
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment collected on the checkout screen.
    Card,
    /// Cash on delivery.
    Door,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Door => write!(f, "door"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "door" => Ok(Self::Door),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Card fields as entered on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub holder_name: String,
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

impl CardDetails {
    /// Basic form validity: all fields present, number 12-19 digits,
    /// month 1-12, four-digit year not in the past, CVV 3-4 digits.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidCard`] naming the offending field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.holder_name.trim().is_empty() {
            return Err(CheckoutError::InvalidCard("holder name"));
        }

        let digits: String = self.card_number.chars().filter(|c| *c != ' ').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidCard("card number"));
        }
        if !(12..=19).contains(&digits.len()) {
            return Err(CheckoutError::InvalidCard("card number"));
        }

        match self.expiry_month.trim().parse::<u8>() {
            Ok(month) if (1..=12).contains(&month) => {}
            _ => return Err(CheckoutError::InvalidCard("expiry month")),
        }

        let current_year = chrono::Utc::now().year();
        match self.expiry_year.trim().parse::<i32>() {
            Ok(year) if (1000..=9999).contains(&year) && year >= current_year => {}
            _ => return Err(CheckoutError::InvalidCard("expiry year")),
        }

        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidCard("cvv"));
        }

        Ok(())
    }
}

/// Payment confirmation input from the checkout screen.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    /// Ad-hoc delivery address typed on the checkout screen; may be empty
    /// when a saved address is to be used.
    pub address_line: String,
    /// Required when `method` is [`PaymentMethod::Card`].
    pub card: Option<CardDetails>,
}

/// One checkout instance. `Completed` is terminal; a new instance (or
/// another `begin`) starts the flow over.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    /// A fresh flow in `Idle`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    /// The current machine state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Begin checkout for the given cart.
    ///
    /// Passes through the implicit review step into `AwaitingPayment`.
    ///
    /// # Errors
    ///
    /// Refused with [`CheckoutError::EmptyCart`] when the cart has no
    /// lines; the state is unchanged.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.state = CheckoutState::AwaitingPayment;
        Ok(())
    }

    /// Confirm payment.
    ///
    /// Preconditions, checked in order: a resolvable delivery address
    /// (non-empty ad-hoc line, or a deliverable saved address), then valid
    /// card details when paying by card. On success the state becomes
    /// `Completed`; on refusal it stays `AwaitingPayment`.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NotAwaitingPayment`], [`CheckoutError::NoAddress`],
    /// or [`CheckoutError::InvalidCard`].
    pub fn confirm(
        &mut self,
        request: &PaymentRequest,
        saved_address: Option<&Address>,
    ) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::AwaitingPayment {
            return Err(CheckoutError::NotAwaitingPayment);
        }

        let has_address = !request.address_line.trim().is_empty()
            || saved_address.is_some_and(Address::is_deliverable);
        if !has_address {
            return Err(CheckoutError::NoAddress);
        }

        if request.method == PaymentMethod::Card {
            request
                .card
                .as_ref()
                .ok_or(CheckoutError::InvalidCard("card details"))?
                .validate()?;
        }

        self.state = CheckoutState::Completed;
        Ok(())
    }

    /// Cancel the checkout, returning to `Idle`. A no-op outside
    /// `AwaitingPayment`.
    pub fn cancel(&mut self) {
        if self.state == CheckoutState::AwaitingPayment {
            self.state = CheckoutState::Idle;
        }
    }
}
