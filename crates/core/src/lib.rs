//! Sofra Core - Shared types library.
//!
//! This crate provides common types used across all Sofra components:
//! - `widget` - The ordering widget core (cart, address book, checkout)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no UI
//! concerns. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and decimal prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
