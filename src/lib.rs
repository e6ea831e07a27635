//! # caseboard
//!
//! Leptos + WASM admin console for the cloud incident-reporter service.
//! Replaces the hosted React dashboard with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the JSON
//! API client. It talks to the incident-reporter REST service with a bearer
//! token and keeps the signed-in session in `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
