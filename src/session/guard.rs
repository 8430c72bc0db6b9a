//! Route guard policies.
//!
//! Pure functions of the current session; evaluated synchronously on every
//! navigation attempt. There is no server round-trip here: a stale token is
//! tolerated until the next API call fails.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::Session;

/// Landing path for anonymous users (marketing home).
pub const ANON_LANDING: &str = "/";
/// Landing path for authenticated users.
pub const AUTH_LANDING: &str = "/dashboard";

/// Outcome of evaluating a guard against a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested target.
    Allow,
    /// Send the user to this path instead.
    Redirect(&'static str),
}

/// Authenticated-only policy: anonymous users are sent to the public landing.
pub fn require_auth(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(ANON_LANDING)
    }
}

/// Anonymous-only policy: logged-in users are sent to their landing page.
///
/// A token without a profile still counts as logged in.
pub fn require_anon(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Redirect(AUTH_LANDING)
    } else {
        GuardDecision::Allow
    }
}
