//! Session store: the single owner of the persisted login.
//!
//! DESIGN
//! ======
//! One `RwSignal<AuthState>` is provided as context at the app root; every
//! page reads the bearer token from it and passes the token explicitly into
//! `net::api` calls. All writes go through the helpers here so the reactive
//! state and its `localStorage` copy never drift apart.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Session, User};
use crate::util::persistence;

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "caseboard_user";

/// Error text shown when an authenticated page has no session to work with.
pub const NOT_AUTHENTICATED: &str = "User not authenticated";

/// Reactive auth state; `None` means logged out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Bearer token of the active session, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Load the persisted session, discarding (and clearing) unreadable values.
pub fn restore_session() -> Option<Session> {
    let raw = persistence::load_raw(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {err}");
            persistence::remove(SESSION_KEY);
            None
        }
    }
}

/// Establish a session: update the store and persist it in one step.
pub fn sign_in(auth: RwSignal<AuthState>, session: Session) {
    persistence::save_json(SESSION_KEY, &session);
    auth.update(|state| state.session = Some(session));
}

/// Drop the session from the store and from storage.
pub fn sign_out(auth: RwSignal<AuthState>) {
    persistence::remove(SESSION_KEY);
    auth.update(|state| state.session = None);
}

/// Replace the user fields of the active session, preserving the token.
/// No-op when logged out.
pub fn merge_profile(auth: RwSignal<AuthState>, user: User) {
    auth.update(|state| {
        if let Some(session) = state.session.as_mut() {
            session.user = user;
        }
    });
    if let Some(session) = auth.get_untracked().session {
        persistence::save_json(SESSION_KEY, &session);
    }
}
