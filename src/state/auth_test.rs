use super::*;
use crate::net::types::{Session, User};

fn sample_session() -> Session {
    Session {
        token: "jwt-1".to_owned(),
        user: User {
            id: "u1".to_owned(),
            firstname: "Ada".to_owned(),
            lastname: "Obi".to_owned(),
            email: "ada@example.com".to_owned(),
            gender: None,
            user_type: Some("admin".to_owned()),
            is_active: Some(true),
            created_at: None,
            image: None,
            developer_title: None,
            years_of_experience: None,
            developer_stack: Vec::new(),
            certifications: Vec::new(),
            portfolio_link: None,
            cv_link: None,
        },
    }
}

// ============================================================
// Defaults
// ============================================================

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert_eq!(state.session, None);
    assert_eq!(state.token(), None);
}

#[test]
fn token_reads_from_the_active_session() {
    let state = AuthState { session: Some(sample_session()) };
    assert_eq!(state.token(), Some("jwt-1"));
}

#[test]
fn session_key_is_stable() {
    // Persisted sessions survive app upgrades only if this never changes.
    assert_eq!(SESSION_KEY, "caseboard_user");
}
