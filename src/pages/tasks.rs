//! Tasks page (authenticated-only).

use leptos::prelude::*;

use crate::net::{ApiClient, api};

/// Task list page. Business logic lives server-side; this page only lists
/// what the API returns.
#[component]
pub fn TasksPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    // A failed fetch degrades to null, rendered as the empty list.
    let tasks = LocalResource::new(move || {
        let client = client.clone();
        async move { api::fetch_tasks(&client).await.unwrap_or_default() }
    });

    view! {
        <div class="tasks-page">
            <h1>"Tareas"</h1>
            <Suspense fallback=move || view! { <p>"Cargando tareas..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|value| {
                            let items: Vec<String> = value
                                .as_array()
                                .cloned()
                                .unwrap_or_default()
                                .iter()
                                .filter_map(|t| {
                                    t.get("titulo")
                                        .and_then(serde_json::Value::as_str)
                                        .map(str::to_owned)
                                })
                                .collect();
                            if items.is_empty() {
                                view! { <p>"No hay tareas todavía."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="tasks-page__list">
                                        {items
                                            .into_iter()
                                            .map(|title| view! { <li>{title}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
