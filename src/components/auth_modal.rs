//! Modal entry point for the auth forms.
//!
//! The modal is one of two presentation surfaces (the other is the routed
//! `/login` / `/register` pages). Both host the same form components and
//! both report only a completed [`FlowKind`] — reading the session back and
//! deciding navigation happens here, on the controller side.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AfterFlow, AuthState, FlowKind};
use crate::state::ui::{AuthMode, UiState};

use super::login_form::LoginForm;
use super::register_form::RegisterForm;

/// Auth modal, rendered while `UiState::auth_open` is set.
#[component]
pub fn AuthModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    // Navigation requests land in a signal so the callback below stays free
    // of browser handles; the effect owns the router navigate.
    let pending_nav = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending_nav.get() {
            pending_nav.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    let on_complete = Callback::new(move |kind: FlowKind| {
        let session = auth.get_untracked().session;
        match auth::after_flow(kind, &session) {
            AfterFlow::CloseAndGoTo(path) => {
                ui.update(UiState::close_auth);
                pending_nav.set(Some(path));
            }
            AfterFlow::SwitchToLogin => {
                ui.update(|u| u.switch_auth_mode(AuthMode::Login));
            }
            AfterFlow::Stay => {}
        }
    });

    let switch_to_register = Callback::new(move |()| {
        ui.update(|u| u.switch_auth_mode(AuthMode::Register));
    });
    let switch_to_login = Callback::new(move |()| {
        ui.update(|u| u.switch_auth_mode(AuthMode::Login));
    });

    let on_close = move |_| ui.update(UiState::close_auth);

    view! {
        <Show when=move || ui.get().auth_open>
            <div class="auth-modal__overlay" on:click=on_close>
                <div class="auth-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="auth-modal__close" on:click=on_close>
                        "×"
                    </button>
                    <Show
                        when=move || ui.get().auth_mode == AuthMode::Login
                        fallback=move || {
                            view! {
                                <RegisterForm
                                    on_complete=on_complete
                                    on_switch=switch_to_login
                                />
                            }
                        }
                    >
                        <LoginForm on_complete=on_complete on_switch=switch_to_register/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
