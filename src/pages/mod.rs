//! Routed page components.
//!
//! DESIGN
//! ======
//! The auth pages (`splash` through `reset`) render standalone cards; the
//! four record pages render inside the [`crate::components::shell::Shell`]
//! chrome and share the collection state machinery. Each record page keeps
//! its add/edit forms private, so the route component is the whole surface.

pub mod audits;
pub mod evidence;
pub mod forgot;
pub mod incidents;
pub mod login;
pub mod reports;
pub mod reset;
pub mod signup;
pub mod splash;
pub mod verify;
