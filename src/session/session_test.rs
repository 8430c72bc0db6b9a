use super::*;

// =============================================================
// UserProfile normalization
// =============================================================

#[test]
fn profile_display_name_prefers_username_then_nombre_then_correo() {
    let v = serde_json::json!({"Username":"ana_u","nombre":"Ana","correo":"ana@x.com"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.display_name, "ana_u");

    let v = serde_json::json!({"nombre":"Ana","correo":"ana@x.com"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.display_name, "Ana");

    let v = serde_json::json!({"correo":"ana@x.com"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.display_name, "ana@x.com");
}

#[test]
fn profile_skips_empty_candidate_fields() {
    let v = serde_json::json!({"Username":"","nombre":"Ana"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.display_name, "Ana");
}

#[test]
fn profile_email_from_correo_or_email() {
    let v = serde_json::json!({"nombre":"Ana","correo":"a@b.com"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.email.as_deref(), Some("a@b.com"));

    let v = serde_json::json!({"nombre":"Ana","email":"a@b.com"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.email.as_deref(), Some("a@b.com"));
}

#[test]
fn profile_from_non_object_is_none() {
    assert!(UserProfile::from_value(&serde_json::Value::Null).is_none());
    assert!(UserProfile::from_value(&serde_json::json!("Ana")).is_none());
}

#[test]
fn profile_keeps_raw_server_object() {
    let v = serde_json::json!({"nombre":"Ana","plan":"premium"});
    let p = UserProfile::from_value(&v).expect("profile");
    assert_eq!(p.raw.get("plan").and_then(serde_json::Value::as_str), Some("premium"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn empty_session_is_not_authenticated() {
    let s = Session::empty();
    assert!(!s.is_authenticated());
    assert!(s.token.is_none());
    assert!(s.user.is_none());
}

#[test]
fn token_only_session_is_authenticated() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: None,
    };
    assert!(s.is_authenticated());
}

#[test]
fn display_name_falls_back_to_email_when_name_empty() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: Some(UserProfile {
            display_name: String::new(),
            email: Some("a@b.com".to_owned()),
            raw: serde_json::Value::Null,
        }),
    };
    assert_eq!(s.display_name(), Some("a@b.com"));
}

#[test]
fn display_name_none_without_profile() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: None,
    };
    assert_eq!(s.display_name(), None);
}
