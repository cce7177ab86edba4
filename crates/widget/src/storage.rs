//! Storage abstractions over the host's persistence surfaces.
//!
//! The widget never talks to browser storage directly; the host hands it a
//! session-scoped [`KeyValueStorage`], a durable one, and a [`CookieJar`].
//! In-memory implementations are provided for tests and the demo binary.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// A synchronous string key-value store (sessionStorage/localStorage shaped).
///
/// All operations are infallible from the caller's perspective; a backend
/// that can fail internally is expected to degrade to absence.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the entry under `key` entirely.
    fn remove(&self, key: &str);
}

/// A cookie surface with max-age support (document.cookie shaped).
pub trait CookieJar: Send + Sync {
    /// Set a cookie that expires after `max_age`.
    fn set(&self, name: &str, value: &str, max_age: Duration);
    /// Read a cookie's value; expired cookies read as absent.
    fn get(&self, name: &str) -> Option<String>;
    /// Delete a cookie.
    fn erase(&self, name: &str);
}

/// In-memory [`KeyValueStorage`] backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory [`CookieJar`] backend that honors max-age on read.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    /// Create an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&self, name: &str, value: &str, max_age: Duration) {
        if let Ok(mut cookies) = self.cookies.lock() {
            cookies.insert(
                name.to_owned(),
                StoredCookie {
                    value: value.to_owned(),
                    expires_at: Utc::now() + max_age,
                },
            );
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        let cookies = self.cookies.lock().ok()?;
        let cookie = cookies.get(name)?;
        if cookie.expires_at <= Utc::now() {
            return None;
        }
        Some(cookie.value.clone())
    }

    fn erase(&self, name: &str) {
        if let Ok(mut cookies) = self.cookies.lock() {
            cookies.remove(name);
        }
    }
}
