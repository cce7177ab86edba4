//! Single-slot address book over durable storage.
//!
//! At most one address exists at a time; saving overwrites it. Validation
//! is strict on save (street and city required, title optional) and lenient
//! on load (malformed stored data reads as absent).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::KeyValueStorage;

/// Errors that can occur when saving an [`Address`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The street field is empty.
    #[error("street cannot be empty")]
    MissingStreet,
    /// The city field is empty.
    #[error("city cannot be empty")]
    MissingCity,
}

/// A delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Optional label (e.g., "Home"); may be empty.
    pub title: String,
    pub street: String,
    pub city: String,
}

impl Address {
    /// Build a validated address. Inputs are trimmed; street and city must
    /// be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when street or city is empty.
    pub fn new(title: &str, street: &str, city: &str) -> Result<Self, AddressError> {
        let street = street.trim();
        let city = city.trim();
        if street.is_empty() {
            return Err(AddressError::MissingStreet);
        }
        if city.is_empty() {
            return Err(AddressError::MissingCity);
        }
        Ok(Self {
            title: title.trim().to_owned(),
            street: street.to_owned(),
            city: city.to_owned(),
        })
    }

    /// Whether the address is usable for delivery.
    ///
    /// An address constructed via [`Address::new`] always is; one
    /// deserialized from storage may carry empty fields.
    #[must_use]
    pub fn is_deliverable(&self) -> bool {
        !self.street.is_empty() && !self.city.is_empty()
    }

    /// Human-readable summary (e.g., "Home – Bağdat Cad. İstanbul").
    /// An empty title falls back to "Address".
    #[must_use]
    pub fn summary(&self) -> String {
        let label = if self.title.is_empty() {
            "Address"
        } else {
            &self.title
        };
        format!("{label} – {}", self.single_line())
    }

    /// The address as one line, suitable for prefilling a form field.
    #[must_use]
    pub fn single_line(&self) -> String {
        format!("{} {}", self.street, self.city).trim().to_owned()
    }
}

/// Repository for the single stored address over durable storage.
pub struct AddressBook<'a> {
    storage: &'a dyn KeyValueStorage,
    key: &'a str,
}

impl<'a> AddressBook<'a> {
    /// Create an address book over the given storage backend and key.
    #[must_use]
    pub const fn new(storage: &'a dyn KeyValueStorage, key: &'a str) -> Self {
        Self { storage, key }
    }

    /// Validate and persist an address, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when street or city is empty; the stored
    /// slot is left unchanged in that case.
    pub fn save(&self, title: &str, street: &str, city: &str) -> Result<Address, AddressError> {
        let address = Address::new(title, street, city)?;
        match serde_json::to_string(&address) {
            Ok(raw) => self.storage.set(self.key, &raw),
            Err(e) => tracing::error!("Failed to serialize address: {e}"),
        }
        Ok(address)
    }

    /// Read the saved address, if any. Malformed stored data reads as
    /// absent rather than failing.
    #[must_use]
    pub fn load(&self) -> Option<Address> {
        let raw = self.storage.get(self.key)?;
        match serde_json::from_str(&raw) {
            Ok(address) => Some(address),
            Err(e) => {
                tracing::warn!("Stored address unreadable, treating as absent: {e}");
                None
            }
        }
    }
}
