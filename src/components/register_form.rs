//! Register form: name, email, password, confirmation.
//!
//! Field errors only appear after the user has touched a field; the progress
//! bar is pure feedback and never gates submission — that is the strict AND
//! of all four checks.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::net::ApiClient;
use crate::state::auth::{self, AuthState, FlowKind};
use crate::state::validation::{
    self, CONFIRM_ERROR, EMAIL_ERROR, NAME_ERROR, PASSWORD_ERROR, RegisterFields,
};

/// Account-creation form.
///
/// A successful registration does not log the user in; the completion
/// callback receives `FlowKind::Register` and the controller switches the
/// surface into login mode.
#[component]
pub fn RegisterForm(
    #[prop(into)] on_complete: Callback<FlowKind>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());

    let touched_name = RwSignal::new(false);
    let touched_email = RwSignal::new(false);
    let touched_password = RwSignal::new(false);
    let touched_password2 = RwSignal::new(false);

    let local_error = RwSignal::new(None::<&'static str>);

    let fields = move || RegisterFields {
        name: name.get(),
        email: email.get(),
        password: password.get(),
        password2: password2.get(),
    };

    let submitting = move || auth.get().is_submitting();
    let complete = move || fields().is_complete();
    let progress = move || fields().progress();

    let error_text = move || {
        local_error
            .get()
            .map(str::to_owned)
            .or_else(|| auth.get().error().map(ToOwned::to_owned))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);

        let fields = RegisterFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            password2: password2.get_untracked(),
        };
        if let Some(msg) = fields.first_error() {
            local_error.set(Some(msg));
            return;
        }

        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Some(kind) =
                auth::register(&client, auth, &fields.name, &fields.email, &fields.password).await
            {
                on_complete.run(kind);
            }
        });
    };

    view! {
        <div class="auth-form">
            <h2 class="auth-form__title">"Crear cuenta"</h2>

            {move || {
                error_text().map(|msg| view! { <div class="auth-form__error">{msg}</div> })
            }}

            <div class="auth-form__progress">
                <div class="auth-form__progress-track">
                    <div
                        class="auth-form__progress-fill"
                        style:width=move || format!("{}%", progress())
                    ></div>
                </div>
                <span class="auth-form__progress-label">
                    {move || format!("Progreso: {}%", progress())}
                </span>
            </div>

            <form on:submit=on_submit>
                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Nombre"
                        prop:value=move || name.get()
                        on:focus=move |_| touched_name.set(true)
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                {move || {
                    (touched_name.get() && !validation::valid_name(&name.get()))
                        .then(|| view! { <div class="auth-form__field-error">{NAME_ERROR}</div> })
                }}

                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:focus=move |_| touched_email.set(true)
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                {move || {
                    (touched_email.get() && !validation::valid_email(&email.get()))
                        .then(|| view! { <div class="auth-form__field-error">{EMAIL_ERROR}</div> })
                }}

                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:focus=move |_| touched_password.set(true)
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                {move || {
                    (touched_password.get() && !validation::valid_password(&password.get()))
                        .then(|| {
                            view! { <div class="auth-form__field-error">{PASSWORD_ERROR}</div> }
                        })
                }}

                <div class="input-wrap">
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirmar contraseña"
                        prop:value=move || password2.get()
                        on:focus=move |_| touched_password2.set(true)
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />
                </div>
                {move || {
                    (touched_password2.get()
                        && !validation::passwords_match(&password.get(), &password2.get()))
                        .then(|| {
                            view! { <div class="auth-form__field-error">{CONFIRM_ERROR}</div> }
                        })
                }}

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || !complete() || submitting()
                >
                    {move || if submitting() { "Enviando..." } else { "Registrarse" }}
                </button>
            </form>

            <div class="auth-footer">
                <span>"¿Ya tienes cuenta? "</span>
                <button class="switch-link" on:click=move |_| on_switch.run(())>
                    "Inicia sesión"
                </button>
            </div>
        </div>
    }
}
