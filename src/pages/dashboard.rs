//! Dashboard page (authenticated-only): task statistics overview.

use leptos::prelude::*;

use crate::net::{ApiClient, api};
use crate::state::auth::AuthState;

/// Authenticated landing page.
///
/// Fetches aggregate task statistics through the shared API client; the
/// bearer token is attached by the client, not by this page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();

    // A failed fetch degrades to an empty object, shown as zeroed stats.
    let stats = LocalResource::new(move || {
        let client = client.clone();
        async move { api::fetch_task_stats(&client).await.unwrap_or_default() }
    });

    let greeting = move || {
        auth.get()
            .session
            .display_name()
            .map_or_else(|| "Hola".to_owned(), |name| format!("Hola, {name}"))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Cargando estadísticas..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|stats| {
                            let completed = stats
                                .get("completadas")
                                .and_then(serde_json::Value::as_u64)
                                .unwrap_or(0);
                            let pending = stats
                                .get("pendientes")
                                .and_then(serde_json::Value::as_u64)
                                .unwrap_or(0);
                            view! {
                                <div class="dashboard-page__stats">
                                    <div class="stat-card">
                                        <span class="stat-card__value">{completed}</span>
                                        <span class="stat-card__label">"Completadas"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{pending}</span>
                                        <span class="stat-card__label">"Pendientes"</span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
