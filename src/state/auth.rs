//! Auth flow controller: login, register, and logout orchestration.
//!
//! DESIGN
//! ======
//! Each flow is a small state machine: `Idle -> Submitting -> Idle/Failed`.
//! The controller is the only code that mutates the session store after
//! bootstrap. Every store write is followed by re-reading a snapshot into
//! [`AuthState`]; the signal update carrying that snapshot is the "session
//! changed" notification, so listeners always observe an already-updated
//! store.
//!
//! Login and register are deliberately asymmetric: a successful login saves
//! the session, a successful register only confirms the account and the UI
//! switches to login mode so the user authenticates with the new credentials.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{self, ApiClient};
use crate::session::guard::AUTH_LANDING;
use crate::session::{Session, SessionStore, UserProfile};

/// Which auth flow completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Register,
}

/// Phase of the current flow instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    /// A request is in flight; further submissions are suppressed.
    Submitting,
    /// The last submission failed with this user-facing message.
    Failed(String),
}

/// Auth state shared through context: the current session snapshot plus the
/// phase of the active flow.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub phase: FlowPhase,
}

impl AuthState {
    /// Bootstrap state from whatever the store currently holds.
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            session: store.get(),
            phase: FlowPhase::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FlowPhase::Submitting
    }

    /// The message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FlowPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter `Submitting`. Returns `false` when a submission is already in
    /// flight, in which case the caller must not issue a network call.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = FlowPhase::Submitting;
        true
    }

    /// Apply a successful login: save, then snapshot.
    ///
    /// The store write happens before the snapshot is taken, so by the time
    /// the surrounding signal update notifies listeners the store and the
    /// state already agree.
    pub fn complete_login(
        &mut self,
        store: &SessionStore,
        token: &str,
        profile: Option<&UserProfile>,
    ) {
        store.save(token, profile);
        self.session = store.get();
        self.phase = FlowPhase::Idle;
    }

    /// Apply a successful registration: no session is established.
    pub fn complete_register(&mut self) {
        self.phase = FlowPhase::Idle;
    }

    /// Record a failed submission. The store is never touched on failure.
    pub fn fail(&mut self, message: String) {
        self.phase = FlowPhase::Failed(message);
    }

    /// Clear the local session unconditionally.
    pub fn logout_local(&mut self, store: &SessionStore) {
        store.clear();
        self.session = store.get();
        self.phase = FlowPhase::Idle;
    }
}

/// What the controller decides after a flow reports completion.
///
/// The presentation surface only reports a [`FlowKind`]; it never inspects
/// the session itself. This is the single completion contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterFlow {
    /// Close any auth UI and navigate to this path.
    CloseAndGoTo(&'static str),
    /// Switch the auth UI into login mode so the new account can sign in.
    SwitchToLogin,
    /// Nothing to do (login reported complete but no session landed).
    Stay,
}

/// Decide what happens after a completed flow, from the session snapshot.
pub fn after_flow(kind: FlowKind, session: &Session) -> AfterFlow {
    match kind {
        FlowKind::Login if session.is_authenticated() => AfterFlow::CloseAndGoTo(AUTH_LANDING),
        FlowKind::Login => AfterFlow::Stay,
        FlowKind::Register => AfterFlow::SwitchToLogin,
    }
}

/// Run the login flow. Returns the completed flow kind, or `None` when the
/// submission was suppressed or failed (the failure message is in `auth`).
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Option<FlowKind> {
    let mut proceed = false;
    auth.update(|a| proceed = a.begin_submit());
    if !proceed {
        return None;
    }

    let body = serde_json::json!({ "email": email, "password": password });
    let path = client.config().paths.login.clone();
    match client.post_json(&path, &body).await {
        Ok(resp) => match api::parse_login_payload(&resp.body, client.config()) {
            Ok(payload) => {
                let profile = payload.usuario.as_ref().and_then(UserProfile::from_value);
                auth.update(|a| a.complete_login(store, &payload.token, profile.as_ref()));
                Some(FlowKind::Login)
            }
            Err(e) => {
                auth.update(|a| a.fail(e.to_string()));
                None
            }
        },
        Err(e) => {
            auth.update(|a| a.fail(e.to_string()));
            None
        }
    }
}

/// Run the register flow. A success confirms the account but establishes no
/// session; the caller switches the UI to login mode via [`after_flow`].
pub async fn register(
    client: &ApiClient,
    auth: RwSignal<AuthState>,
    name: &str,
    email: &str,
    password: &str,
) -> Option<FlowKind> {
    let mut proceed = false;
    auth.update(|a| proceed = a.begin_submit());
    if !proceed {
        return None;
    }

    let body = serde_json::json!({ "name": name, "email": email, "password": password });
    let path = client.config().paths.register.clone();
    match client.post_json(&path, &body).await {
        Ok(_) => {
            auth.update(AuthState::complete_register);
            Some(FlowKind::Register)
        }
        Err(e) => {
            auth.update(|a| a.fail(e.to_string()));
            None
        }
    }
}

/// Run the logout flow.
///
/// The server call is best-effort: whatever happens, the local session is
/// cleared and listeners are notified. Local state is authoritative over the
/// remote hint, so a dead server can never strand a stale session.
pub async fn logout(client: &ApiClient, store: &SessionStore, auth: RwSignal<AuthState>) {
    let path = client.config().paths.logout.clone();
    if let Err(e) = client.post_json(&path, &serde_json::json!({})).await {
        leptos::logging::warn!("server-side logout failed, clearing locally: {e}");
    }
    auth.update(|a| a.logout_local(store));
}
