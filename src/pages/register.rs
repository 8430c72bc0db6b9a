//! Routed register page (anonymous-only).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::register_form::RegisterForm;
use crate::state::auth::{self, AfterFlow, AuthState, FlowKind};
use crate::state::ui::{AuthMode, UiState};

/// Standalone register page hosting the shared form.
///
/// Registration establishes no session, so on completion the controller's
/// decision is to move to the login surface — here, the `/login` route.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let go_login = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if go_login.get() {
            go_login.set(false);
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_complete = Callback::new(move |kind: FlowKind| {
        let session = auth.get_untracked().session;
        if auth::after_flow(kind, &session) == AfterFlow::SwitchToLogin {
            go_login.set(true);
        }
    });
    let on_switch = Callback::new(move |()| {
        ui.update(|u| u.open_auth(AuthMode::Login));
    });

    view! {
        <div class="auth-page">
            <RegisterForm on_complete=on_complete on_switch=on_switch/>
        </div>
    }
}
