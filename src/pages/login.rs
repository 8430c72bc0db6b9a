//! Routed login page (anonymous-only).

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::state::auth::FlowKind;
use crate::state::ui::{AuthMode, UiState};

/// Standalone login page hosting the shared form.
///
/// Navigation after a successful login is handled by the anonymous-only
/// guard: once the session lands, the guard redirects away from this page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Completion needs no action here; the guard reacts to the session.
    let on_complete = Callback::new(move |_: FlowKind| {});
    let on_switch = Callback::new(move |()| {
        ui.update(|u| u.open_auth(AuthMode::Register));
    });

    view! {
        <div class="auth-page">
            <LoginForm on_complete=on_complete on_switch=on_switch/>
        </div>
    }
}
