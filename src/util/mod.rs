//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate browser/environment concerns (storage, downloads)
//! and pure presentation rules (formatting, validation) from page logic so
//! the behavioral pieces stay unit-testable.

pub mod export;
pub mod format;
pub mod persistence;
pub mod validation;
