//! Profile page (authenticated-only).

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shows the normalized profile from the current session snapshot.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = move || {
        auth.get()
            .session
            .display_name()
            .unwrap_or("Usuario")
            .to_owned()
    };
    let email = move || {
        auth.get()
            .session
            .user
            .and_then(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="profile-page">
            <h1>"Perfil"</h1>
            <dl class="profile-page__fields">
                <dt>"Nombre"</dt>
                <dd>{name}</dd>
                <dt>"Correo"</dt>
                <dd>{email}</dd>
            </dl>
        </div>
    }
}
