//! Sofra ordering widget core.
//!
//! This crate provides the ordering widget as a library: the menu catalog,
//! the session cart, the address book, the checkout state machine, and pure
//! view-model projections. The surrounding UI toolkit is expected to call
//! the [`actions::Widget`] surface and render the returned view models; no
//! DOM or rendering concern lives here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod address;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod consent;
pub mod error;
pub mod pricing;
pub mod state;
pub mod storage;
pub mod view;

pub use actions::Widget;
pub use error::WidgetError;
pub use state::AppState;
