//! Reusable UI building blocks shared across pages.

pub mod action_menu;
pub mod delete_dialog;
pub mod feedback;
pub mod filter_popover;
pub mod form;
pub mod paginator;
pub mod profile_modal;
pub mod shell;
