//! Route guard wrapper components.
//!
//! Thin Leptos shells over the pure policies in [`crate::session::guard`]:
//! children render only while the policy allows, and a redirect effect fires
//! whenever the session snapshot disagrees with the current route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::guard::{self, GuardDecision};
use crate::state::auth::AuthState;

/// Renders children only for authenticated sessions; anonymous users are
/// sent to the public landing page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard::require_auth(&auth.get().session) {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            guard::require_auth(&auth.get().session) == GuardDecision::Allow
        }>{children()}</Show>
    }
}

/// Renders children only for anonymous sessions; logged-in users are sent to
/// their landing page. A token without a profile still counts as logged in.
#[component]
pub fn RequireAnon(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard::require_anon(&auth.get().session) {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            guard::require_anon(&auth.get().session) == GuardDecision::Allow
        }>{children()}</Show>
    }
}
