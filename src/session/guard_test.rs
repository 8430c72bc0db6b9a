use super::*;
use crate::session::UserProfile;

fn sessions() -> Vec<Session> {
    vec![
        Session::empty(),
        Session {
            token: Some("tok".to_owned()),
            user: None,
        },
        Session {
            token: Some("tok".to_owned()),
            user: Some(UserProfile {
                display_name: "Ana".to_owned(),
                email: None,
                raw: serde_json::Value::Null,
            }),
        },
    ]
}

// =============================================================
// Individual policies
// =============================================================

#[test]
fn require_auth_redirects_anonymous_to_public_landing() {
    assert_eq!(
        require_auth(&Session::empty()),
        GuardDecision::Redirect(ANON_LANDING)
    );
}

#[test]
fn require_auth_allows_token_only_session() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: None,
    };
    assert_eq!(require_auth(&s), GuardDecision::Allow);
}

#[test]
fn require_anon_redirects_authenticated_to_dashboard() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: None,
    };
    assert_eq!(require_anon(&s), GuardDecision::Redirect(AUTH_LANDING));
}

#[test]
fn require_anon_allows_empty_session() {
    assert_eq!(require_anon(&Session::empty()), GuardDecision::Allow);
}

// =============================================================
// Complementarity: for every session exactly one policy allows
// =============================================================

#[test]
fn guards_are_logical_complements() {
    for session in sessions() {
        let auth_allows = require_auth(&session) == GuardDecision::Allow;
        let anon_allows = require_anon(&session) == GuardDecision::Allow;
        assert_ne!(auth_allows, anon_allows, "session: {session:?}");
    }
}
