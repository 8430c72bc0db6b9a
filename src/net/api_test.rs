use super::*;

// =============================================================
// Config defaults
// =============================================================

#[test]
fn default_config_matches_backend_contract() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:5000");
    assert_eq!(cfg.timeout_ms, 12_000);
    assert_eq!(cfg.paths.login, "/auth/login");
    assert_eq!(cfg.paths.register, "/auth/register");
    assert_eq!(cfg.token_fields, vec!["access_token", "access"]);
    assert_eq!(cfg.usuario_field, "usuario");
    assert_eq!(cfg.auth_header, "Authorization");
    assert_eq!(cfg.auth_scheme, "Bearer");
}

#[test]
fn url_joins_base_and_path() {
    let store = crate::session::SessionStore::in_memory();
    let client = ApiClient::new(ApiConfig::default(), store);
    assert_eq!(client.url("/auth/login"), "http://localhost:5000/auth/login");

    let store = crate::session::SessionStore::in_memory();
    let client = ApiClient::new(
        ApiConfig {
            base_url: "http://api.example.com/".to_owned(),
            ..ApiConfig::default()
        },
        store,
    );
    assert_eq!(client.url("/tarea"), "http://api.example.com/tarea");
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_json_error_field() {
    let msg = error_message(401, r#"{"error":"Credenciales inválidas","detail":"x"}"#);
    assert_eq!(msg, "Credenciales inválidas");
}

#[test]
fn error_message_accepts_bare_json_string() {
    let msg = error_message(400, r#""correo duplicado""#);
    assert_eq!(msg, "correo duplicado");
}

#[test]
fn error_message_falls_back_to_raw_body() {
    let msg = error_message(500, "internal blowup");
    assert_eq!(msg, "internal blowup");
}

#[test]
fn error_message_generic_when_body_empty() {
    let msg = error_message(503, "");
    assert_eq!(msg, "Error del servidor (503)");
}

// =============================================================
// Login payload parsing
// =============================================================

#[test]
fn parse_login_payload_reads_primary_token_field() {
    let cfg = ApiConfig::default();
    let payload =
        parse_login_payload(r#"{"access_token":"tok123","usuario":{"nombre":"Ana"}}"#, &cfg)
            .expect("payload");
    assert_eq!(payload.token, "tok123");
    assert!(payload.usuario.is_some());
}

#[test]
fn parse_login_payload_falls_back_to_access_field() {
    let cfg = ApiConfig::default();
    let payload = parse_login_payload(r#"{"access":"tok456"}"#, &cfg).expect("payload");
    assert_eq!(payload.token, "tok456");
    assert_eq!(payload.usuario, None);
}

#[test]
fn parse_login_payload_null_usuario_counts_as_absent() {
    let cfg = ApiConfig::default();
    let payload =
        parse_login_payload(r#"{"access_token":"tok","usuario":null}"#, &cfg).expect("payload");
    assert_eq!(payload.usuario, None);
}

#[test]
fn parse_login_payload_rejects_missing_or_empty_token() {
    let cfg = ApiConfig::default();

    let err = parse_login_payload(r"{}", &cfg).unwrap_err();
    assert_eq!(err, ApiError::Rejected(MISSING_TOKEN_MSG.to_owned()));

    let err = parse_login_payload(r#"{"access_token":""}"#, &cfg).unwrap_err();
    assert_eq!(err, ApiError::Rejected(MISSING_TOKEN_MSG.to_owned()));
}

#[test]
fn parse_login_payload_rejects_non_json_body() {
    let cfg = ApiConfig::default();
    let err = parse_login_payload("<html>oops</html>", &cfg).unwrap_err();
    assert_eq!(err, ApiError::Rejected(MISSING_TOKEN_MSG.to_owned()));
}
