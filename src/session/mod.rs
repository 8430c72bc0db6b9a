//! Session model and durable session store.
//!
//! DESIGN
//! ======
//! The session is the client's local belief about who is logged in: a bearer
//! token plus an optional normalized profile. The store is the single source
//! of truth; everything else reads snapshots and only the auth flow writes.

pub mod guard;
pub mod store;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub use store::SessionStore;

/// Ordered candidate fields a profile's display name is resolved from.
///
/// The backend has historically used several shapes for the user object, so
/// the first present, non-empty field wins. Resolved once when the profile is
/// normalized, never re-resolved at render sites.
const DISPLAY_NAME_FIELDS: [&str; 3] = ["Username", "nombre", "correo"];

/// Candidate fields for the profile's email address.
const EMAIL_FIELDS: [&str; 2] = ["correo", "email"];

/// Normalized user profile persisted alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub email: Option<String>,
    /// Raw server object, kept so fields this client does not model survive
    /// a save/load cycle.
    #[serde(default)]
    pub raw: serde_json::Value,
}

impl UserProfile {
    /// Normalize a raw server-side user object.
    ///
    /// Returns `None` when the value is not an object (e.g. the backend sent
    /// `null` for the profile field).
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;

        let display_name = DISPLAY_NAME_FIELDS
            .iter()
            .filter_map(|f| obj.get(*f).and_then(serde_json::Value::as_str))
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_owned();

        let email = EMAIL_FIELDS
            .iter()
            .filter_map(|f| obj.get(*f).and_then(serde_json::Value::as_str))
            .find(|s| !s.is_empty())
            .map(str::to_owned);

        Some(Self {
            display_name,
            email,
            raw: value.clone(),
        })
    }
}

/// The client's current identity: token plus optional profile.
///
/// Invariant: `user` is only present when `token` is present. A token without
/// a profile is valid (degraded) state, e.g. right after login when the
/// response carried no user object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// A session with no token and no profile.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a token is present. Profile completeness is irrelevant here;
    /// guards and the navbar only care about this bit.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name to show in the UI for the logged-in user, falling back to the
    /// email when the profile carried no usable name.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        if user.display_name.is_empty() {
            user.email.as_deref()
        } else {
            Some(user.display_name.as_str())
        }
    }
}
