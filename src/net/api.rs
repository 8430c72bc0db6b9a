//! Shared API client for communicating with the backend.
//!
//! Every feature module goes through [`ApiClient`], which attaches the bearer
//! token from the session store to each request and enforces a fixed timeout.
//!
//! Browser builds: real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a network error, so flow logic and the
//! parsing helpers below can be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! A rejected response (non-2xx) becomes [`ApiError::Rejected`] carrying the
//! best-effort server message; transport failures and timeouts become
//! [`ApiError::Network`] with a generic connectivity message. The client does
//! not interpret 401/403 specially: clearing the session on any unauthorized
//! response could destroy a valid session over one endpoint's authorization
//! rule, so that reaction is left to explicit logout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use crate::session::SessionStore;

/// Generic connectivity message shown for timeouts and unreachable servers.
pub const NETWORK_ERROR_MSG: &str = "No se pudo conectar con el servidor";
/// Message for a login response that carried no recognizable token.
pub const MISSING_TOKEN_MSG: &str = "No se encontró access_token en la respuesta";

/// Endpoint paths, relative to the base URL.
#[derive(Clone, Debug)]
pub struct ApiPaths {
    pub login: String,
    pub register: String,
    pub logout: String,
    pub tasks: String,
    pub task_stats: String,
}

impl Default for ApiPaths {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_owned(),
            register: "/auth/register".to_owned(),
            logout: "/auth/logout".to_owned(),
            tasks: "/tarea".to_owned(),
            task_stats: "/tarea/estadisticas".to_owned(),
        }
    }
}

/// Externalized client configuration: base address, timeout, endpoint paths,
/// and the field names expected in auth responses.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub paths: ApiPaths,
    /// Token field candidates in the login response, first match wins.
    pub token_fields: Vec<String>,
    /// Field carrying the user profile object in the login response.
    pub usuario_field: String,
    /// Header the credential is attached under.
    pub auth_header: String,
    /// Scheme prefix for the credential value.
    pub auth_scheme: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            timeout_ms: 12_000,
            paths: ApiPaths::default(),
            token_fields: vec!["access_token".to_owned(), "access".to_owned()],
            usuario_field: "usuario".to_owned(),
            auth_header: "Authorization".to_owned(),
            auth_scheme: "Bearer".to_owned(),
        }
    }
}

/// Errors surfaced by the API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status; carries the extracted
    /// server message.
    #[error("{0}")]
    Rejected(String),
    /// Timeout or transport failure; the server never answered.
    #[error("{0}")]
    Network(String),
}

/// Raw body of a successful (2xx) response.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub body: String,
}

/// The single outbound HTTP pipeline.
///
/// Reads the session store before every request; if a token is present it is
/// attached under the configured header (`Authorization: Bearer <token>` by
/// default), otherwise the request goes out unauthenticated. Requests are
/// never queued waiting for a credential.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, store: SessionStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// POST a JSON body.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::Post, path, Some(body)).await
    }

    /// GET an endpoint.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Get, path, None).await
    }

    #[cfg(feature = "csr")]
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        use futures::future::Either;

        let url = self.url(path);
        let mut builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
        };

        if let Some(token) = self.store.get_token() {
            builder = builder.header(
                &self.config.auth_header,
                &format!("{} {token}", self.config.auth_scheme),
            );
        }

        let request = match body {
            Some(json) => builder.json(json).map_err(|e| {
                leptos::logging::warn!("failed to encode request body: {e}");
                ApiError::Network(NETWORK_ERROR_MSG.to_owned())
            })?,
            None => builder.build().map_err(|e| {
                leptos::logging::warn!("failed to build request: {e}");
                ApiError::Network(NETWORK_ERROR_MSG.to_owned())
            })?,
        };

        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            self.config.timeout_ms,
        )));

        let response = match futures::future::select(Box::pin(request.send()), Box::pin(timeout))
            .await
        {
            Either::Left((Ok(resp), _)) => resp,
            Either::Left((Err(e), _)) => {
                leptos::logging::warn!("request to {url} failed: {e}");
                return Err(ApiError::Network(NETWORK_ERROR_MSG.to_owned()));
            }
            Either::Right(((), _)) => {
                leptos::logging::warn!("request to {url} timed out");
                return Err(ApiError::Network(NETWORK_ERROR_MSG.to_owned()));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if response.ok() {
            Ok(ApiResponse { body })
        } else {
            Err(ApiError::Rejected(error_message(status, &body)))
        }
    }

    #[cfg(not(feature = "csr"))]
    async fn request(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        Err(ApiError::Network(NETWORK_ERROR_MSG.to_owned()))
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
}

/// Best-effort extraction of a human-readable message from an error response.
///
/// Prefers a JSON `{"error": "..."}` field, then a bare JSON string, then the
/// raw body, then a generic status line.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("error").and_then(serde_json::Value::as_str) {
            return msg.to_owned();
        }
        if let Some(msg) = value.as_str() {
            return msg.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Error del servidor ({status})")
    } else {
        trimmed.to_owned()
    }
}

/// Token and optional raw profile extracted from a login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginPayload {
    pub token: String,
    pub usuario: Option<serde_json::Value>,
}

/// Parse a successful login response body.
///
/// The token is taken from the first configured field present as a non-empty
/// string; a response without one is rejected. The profile field is optional
/// and `null` counts as absent.
pub fn parse_login_payload(body: &str, config: &ApiConfig) -> Result<LoginPayload, ApiError> {
    let value = serde_json::from_str::<serde_json::Value>(body)
        .map_err(|_| ApiError::Rejected(MISSING_TOKEN_MSG.to_owned()))?;

    let token = config
        .token_fields
        .iter()
        .filter_map(|f| value.get(f).and_then(serde_json::Value::as_str))
        .find(|t| !t.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Rejected(MISSING_TOKEN_MSG.to_owned()))?;

    let usuario = value
        .get(&config.usuario_field)
        .filter(|v| !v.is_null())
        .cloned();

    Ok(LoginPayload { token, usuario })
}

/// Fetch the task list for the dashboard. Returns `None` on any failure so
/// the page degrades instead of crashing.
pub async fn fetch_tasks(client: &ApiClient) -> Option<serde_json::Value> {
    let path = client.config().paths.tasks.clone();
    let resp = client.get(&path).await.ok()?;
    serde_json::from_str(&resp.body).ok()
}

/// Fetch aggregate task statistics for the dashboard.
pub async fn fetch_task_stats(client: &ApiClient) -> Option<serde_json::Value> {
    let path = client.config().paths.task_stats.clone();
    let resp = client.get(&path).await.ok()?;
    serde_json::from_str(&resp.body).ok()
}
