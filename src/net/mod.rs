//! Network layer: API client, wire types, and error normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! All remote state lives behind this module. Pages call `api` functions
//! with an explicit bearer token and receive plain data or an [`error::ApiError`]
//! that is already safe to show.

pub mod api;
pub mod error;
pub mod types;
