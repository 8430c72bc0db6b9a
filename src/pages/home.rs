//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{AuthMode, UiState};

/// Marketing home — the anonymous landing path. Authenticated visitors see
/// the same page with the auth call-to-action hidden.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let anonymous = move || !auth.get().session.is_authenticated();

    view! {
        <section class="home-page">
            <h1>"Synapse"</h1>
            <p class="home-page__tagline">
                "Concentración, bienestar y productividad en un solo lugar."
            </p>
            <Show when=anonymous>
                <div class="home-page__cta">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| ui.update(|u| u.open_auth(AuthMode::Register))
                    >
                        "Comienza gratis"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| ui.update(|u| u.open_auth(AuthMode::Login))
                    >
                        "Ya tengo cuenta"
                    </button>
                </div>
            </Show>
        </section>
    }
}
