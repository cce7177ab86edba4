//! Widget configuration loaded from environment variables.
//!
//! Every variable has a default, so `from_env()` succeeds in an empty
//! environment. A `.env` file is honored when present.
//!
//! # Environment Variables
//!
//! - `SOFRA_CART_KEY` - Ephemeral storage key for the cart (default: `shoppingCart`)
//! - `SOFRA_ADDRESS_KEY` - Durable storage key for the address (default: `registeredAddress`)
//! - `SOFRA_CONSENT_COOKIE` - Cookie name for the consent decision (default: `ys_consent`)
//! - `SOFRA_LAST_PAY_COOKIE` - Cookie name for the remembered payment method (default: `ys_last_pay`)
//! - `SOFRA_DELIVERY_FEE` - Flat delivery fee for non-empty carts (default: `45.00`)
//! - `SOFRA_COOKIE_TTL_DAYS` - Max-age for preference cookies (default: `180`)
//! - `SOFRA_CURRENCY` - ISO 4217 currency code (default: `TRY`)

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use sofra_core::Currency;

const DEFAULT_CART_KEY: &str = "shoppingCart";
const DEFAULT_ADDRESS_KEY: &str = "registeredAddress";
const DEFAULT_CONSENT_COOKIE: &str = "ys_consent";
const DEFAULT_LAST_PAY_COOKIE: &str = "ys_last_pay";
const DEFAULT_DELIVERY_FEE: &str = "45.00";
const DEFAULT_COOKIE_TTL_DAYS: i64 = 180;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ordering widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Ephemeral (session) storage key holding the serialized cart
    pub cart_key: String,
    /// Durable (local) storage key holding the serialized address
    pub address_key: String,
    /// Cookie recording the consent decision ("accepted"/"rejected")
    pub consent_cookie: String,
    /// Cookie recording the last-used payment method ("card"/"door")
    pub last_payment_cookie: String,
    /// Flat delivery fee charged when the cart is non-empty
    pub delivery_fee: Decimal,
    /// Max-age for preference cookies, in days
    pub cookie_ttl_days: i64,
    /// Currency every price in the widget is denominated in
    pub currency: Currency,
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let delivery_fee = parse_env("SOFRA_DELIVERY_FEE", DEFAULT_DELIVERY_FEE, |s| {
            Decimal::from_str(s).map_err(|e| e.to_string())
        })?;
        let cookie_ttl_days = parse_env(
            "SOFRA_COOKIE_TTL_DAYS",
            &DEFAULT_COOKIE_TTL_DAYS.to_string(),
            |s| s.parse::<i64>().map_err(|e| e.to_string()),
        )?;
        let currency = parse_env("SOFRA_CURRENCY", Currency::default().code(), |s| {
            Currency::from_str(s).map_err(|e| e.to_string())
        })?;

        Ok(Self {
            cart_key: get_env_or_default("SOFRA_CART_KEY", DEFAULT_CART_KEY),
            address_key: get_env_or_default("SOFRA_ADDRESS_KEY", DEFAULT_ADDRESS_KEY),
            consent_cookie: get_env_or_default("SOFRA_CONSENT_COOKIE", DEFAULT_CONSENT_COOKIE),
            last_payment_cookie: get_env_or_default(
                "SOFRA_LAST_PAY_COOKIE",
                DEFAULT_LAST_PAY_COOKIE,
            ),
            delivery_fee,
            cookie_ttl_days,
            currency,
        })
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_owned(),
            address_key: DEFAULT_ADDRESS_KEY.to_owned(),
            consent_cookie: DEFAULT_CONSENT_COOKIE.to_owned(),
            last_payment_cookie: DEFAULT_LAST_PAY_COOKIE.to_owned(),
            delivery_fee: Decimal::new(4500, 2),
            cookie_ttl_days: DEFAULT_COOKIE_TTL_DAYS,
            currency: Currency::default(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get an environment variable with a default and parse it.
fn parse_env<T>(
    key: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let raw = get_env_or_default(key, default);
    parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e))
}
