//! Cookie consent and payment-method memory.
//!
//! Two preference cookies, each with the configured max-age (180 days by
//! default): one records the consent decision, one the last-used payment
//! method. The payment method is only ever written or read back while
//! consent stands at `Accepted`.

use std::str::FromStr;

use chrono::Duration;

use crate::checkout::PaymentMethod;
use crate::config::WidgetConfig;
use crate::storage::CookieJar;

/// The user's consent decision; absent means undecided (banner shown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Rejected,
}

impl std::fmt::Display for Consent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for Consent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid consent value: {s}")),
        }
    }
}

/// Repository for the preference cookies.
pub struct ConsentStore<'a> {
    cookies: &'a dyn CookieJar,
    config: &'a WidgetConfig,
}

impl<'a> ConsentStore<'a> {
    /// Create a consent store over the given cookie jar.
    #[must_use]
    pub const fn new(cookies: &'a dyn CookieJar, config: &'a WidgetConfig) -> Self {
        Self { cookies, config }
    }

    fn ttl(&self) -> Duration {
        Duration::days(self.config.cookie_ttl_days)
    }

    /// The recorded consent decision, if any. An unparseable cookie value
    /// reads as undecided.
    #[must_use]
    pub fn decision(&self) -> Option<Consent> {
        let raw = self.cookies.get(&self.config.consent_cookie)?;
        raw.parse().ok()
    }

    /// Whether preference memory is allowed.
    #[must_use]
    pub fn has_consent(&self) -> bool {
        self.decision() == Some(Consent::Accepted)
    }

    /// Record acceptance and immediately remember the currently selected
    /// payment method.
    pub fn accept(&self, current_method: PaymentMethod) {
        self.cookies.set(
            &self.config.consent_cookie,
            &Consent::Accepted.to_string(),
            self.ttl(),
        );
        self.remember_payment_method(current_method);
    }

    /// Record rejection and erase any remembered payment method.
    pub fn reject(&self) {
        self.cookies.set(
            &self.config.consent_cookie,
            &Consent::Rejected.to_string(),
            self.ttl(),
        );
        self.cookies.erase(&self.config.last_payment_cookie);
    }

    /// Remember the payment method for prefill on the next checkout.
    /// A no-op without standing consent.
    pub fn remember_payment_method(&self, method: PaymentMethod) {
        if !self.has_consent() {
            return;
        }
        self.cookies.set(
            &self.config.last_payment_cookie,
            &method.to_string(),
            self.ttl(),
        );
    }

    /// The remembered payment method, honored only while consent stands.
    #[must_use]
    pub fn recall_payment_method(&self) -> Option<PaymentMethod> {
        if !self.has_consent() {
            return None;
        }
        let raw = self.cookies.get(&self.config.last_payment_cookie)?;
        raw.parse().ok()
    }
}
