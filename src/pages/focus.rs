//! Concentration page.
//!
//! The timer/session mechanics live in their own feature module server-side;
//! the shell only provides the routed surface.

use leptos::prelude::*;

/// Focus-session page (authenticated-only route).
#[component]
pub fn FocusPage() -> impl IntoView {
    view! {
        <div class="focus-page">
            <h1>"Concentración"</h1>
            <p>"Elige una técnica y comienza una sesión de enfoque."</p>
        </div>
    }
}
