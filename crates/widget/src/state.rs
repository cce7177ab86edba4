//! Application state shared across the action surface.

use std::sync::Arc;

use crate::address::AddressBook;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::consent::ConsentStore;
use crate::storage::{CookieJar, KeyValueStorage, MemoryCookieJar, MemoryStorage};

/// Application state: configuration, catalog, and the host's storage
/// backends, constructed once at startup.
///
/// This struct is cheaply cloneable via `Arc`. Stores are handed out as
/// lightweight repository values borrowing from it, so nothing reaches for
/// ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WidgetConfig,
    catalog: Catalog,
    /// Session-scoped storage holding the cart.
    session: Box<dyn KeyValueStorage>,
    /// Durable storage holding the address.
    local: Box<dyn KeyValueStorage>,
    cookies: Box<dyn CookieJar>,
}

impl AppState {
    /// Create application state over the host's storage backends.
    #[must_use]
    pub fn new(
        config: WidgetConfig,
        catalog: Catalog,
        session: Box<dyn KeyValueStorage>,
        local: Box<dyn KeyValueStorage>,
        cookies: Box<dyn CookieJar>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                session,
                local,
                cookies,
            }),
        }
    }

    /// Create application state backed entirely by in-memory storage,
    /// simulating one isolated browsing session. Used by tests and the
    /// demo binary.
    #[must_use]
    pub fn in_memory(config: WidgetConfig, catalog: Catalog) -> Self {
        Self::new(
            config,
            catalog,
            Box::new(MemoryStorage::new()),
            Box::new(MemoryStorage::new()),
            Box::new(MemoryCookieJar::new()),
        )
    }

    /// Get a reference to the widget configuration.
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The cart repository over session storage.
    #[must_use]
    pub fn cart_store(&self) -> CartStore<'_> {
        CartStore::new(self.inner.session.as_ref(), &self.inner.config.cart_key)
    }

    /// The address book over durable storage.
    #[must_use]
    pub fn address_book(&self) -> AddressBook<'_> {
        AddressBook::new(self.inner.local.as_ref(), &self.inner.config.address_key)
    }

    /// The consent/preference store over the cookie jar.
    #[must_use]
    pub fn consent(&self) -> ConsentStore<'_> {
        ConsentStore::new(self.inner.cookies.as_ref(), &self.inner.config)
    }
}
