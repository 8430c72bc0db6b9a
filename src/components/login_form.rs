//! Login form: email + password with client-side validation.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::net::ApiClient;
use crate::session::SessionStore;
use crate::state::auth::{self, AuthState, FlowKind};
use crate::state::validation::LoginFields;

/// Credential form for an existing account.
///
/// Reports only the completed [`FlowKind`] upward; it never reads the session
/// itself. The submit button is disabled while a request is in flight.
#[component]
pub fn LoginForm(
    #[prop(into)] on_complete: Callback<FlowKind>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    // Local validation error; server-side failures come from the flow phase.
    let local_error = RwSignal::new(None::<&'static str>);

    let submitting = move || auth.get().is_submitting();
    let error_text = move || {
        local_error
            .get()
            .map(str::to_owned)
            .or_else(|| auth.get().error().map(ToOwned::to_owned))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);

        let fields = LoginFields {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Some(msg) = fields.first_error() {
            local_error.set(Some(msg));
            return;
        }

        let client = client.clone();
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Some(kind) =
                auth::login(&client, &store, auth, &fields.email, &fields.password).await
            {
                on_complete.run(kind);
            }
        });
    };

    view! {
        <div class="auth-form">
            <h2 class="auth-form__title">"Iniciar Sesión"</h2>

            {move || {
                error_text().map(|msg| view! { <div class="auth-form__error">{msg}</div> })
            }}

            <form on:submit=on_submit>
                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="input-wrap__toggle"
                        on:click=move |_| show_password.update(|s| *s = !*s)
                    >
                        {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                    </button>
                </div>

                <button type="submit" class="submit-btn" disabled=submitting>
                    {move || if submitting() { "Enviando..." } else { "Iniciar Sesión" }}
                </button>
            </form>

            <div class="auth-footer">
                <span>"¿No tienes cuenta? "</span>
                <button class="switch-link" on:click=move |_| on_switch.run(())>
                    "Regístrate aquí"
                </button>
            </div>
        </div>
    }
}
