//! Durable session store backed by `localStorage` in the browser.
//!
//! Every read goes to the medium; there is no cache layer. Call frequency is
//! low (per navigation, per outbound request) so simplicity wins.
//!
//! All browser access is gated behind `#[cfg(feature = "csr")]`; native
//! builds and tests use the in-memory backend so the store's contract can be
//! exercised with plain `cargo test`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Session, UserProfile};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user profile.
pub const USUARIO_KEY: &str = "usuario";

/// Where session data lives.
///
/// `Browser` reads and writes `localStorage` directly on every call.
/// `Memory` is a plain map used natively and in tests.
#[derive(Clone, Debug)]
enum Backend {
    Browser,
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

/// Single source of truth for the current [`Session`].
///
/// Only the auth flow writes here; everything else reads snapshots.
#[derive(Clone, Debug)]
pub struct SessionStore {
    backend: Backend,
}

impl SessionStore {
    /// Store over the browser's `localStorage`. Outside the browser every
    /// read returns the empty session and writes are dropped.
    pub fn browser() -> Self {
        Self {
            backend: Backend::Browser,
        }
    }

    /// Store over an in-memory map, for native builds and tests.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    /// Read the current session.
    ///
    /// Never fails: missing or malformed data yields the empty session (a
    /// malformed profile is discarded, leaving a token-only session).
    pub fn get(&self) -> Session {
        let token = self.get_token();
        if token.is_none() {
            return Session::empty();
        }

        let user = self.read(USUARIO_KEY).and_then(|raw| {
            match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    leptos::logging::warn!("discarding malformed stored profile: {e}");
                    None
                }
            }
        });

        Session { token, user }
    }

    /// Read just the token. Never throws; an inaccessible medium or an
    /// empty-string value both count as no token.
    pub fn get_token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist a new session.
    ///
    /// The token is written first so no reader can observe a profile without
    /// a token. The profile is only written when provided; an existing stored
    /// profile is left untouched otherwise.
    pub fn save(&self, token: &str, user: Option<&UserProfile>) {
        self.write(TOKEN_KEY, token);
        if let Some(user) = user {
            match serde_json::to_string(user) {
                Ok(json) => self.write(USUARIO_KEY, &json),
                Err(e) => leptos::logging::warn!("failed to serialize profile: {e}"),
            }
        }
    }

    /// Remove both fields. Idempotent. The profile goes first so the
    /// user-implies-token invariant holds at every point.
    pub fn clear(&self) {
        self.remove(USUARIO_KEY);
        self.remove(TOKEN_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Browser => local_storage_get(key),
            Backend::Memory(map) => map.lock().ok()?.get(key).cloned(),
        }
    }

    fn write(&self, key: &str, value: &str) {
        match &self.backend {
            Backend::Browser => local_storage_set(key, value),
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.insert(key.to_owned(), value.to_owned());
                }
            }
        }
    }

    fn remove(&self, key: &str) {
        match &self.backend {
            Backend::Browser => local_storage_remove(key),
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.remove(key);
                }
            }
        }
    }
}

fn local_storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn local_storage_set(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn local_storage_remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
