//! Reactive state shared across pages.
//!
//! ARCHITECTURE
//! ============
//! `auth` is app-global and provided as context from the root component.
//! `collection` is instantiated per list page; it is state-shaped but not
//! shared, so nothing here outlives the page that owns it except the
//! session.

pub mod auth;
pub mod collection;
