//! Sidebar navigation with auth entry points, theme toggle, and language menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::ApiClient;
use crate::session::SessionStore;
use crate::session::guard::ANON_LANDING;
use crate::state::auth::{self, AuthState};
use crate::state::ui::{AuthMode, UiState};
use crate::util::{language, theme};

struct NavItem {
    path: &'static str,
    label: &'static str,
    requires_auth: bool,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { path: "/", label: "Inicio", requires_auth: false },
    NavItem { path: "/concentracion", label: "Concentración", requires_auth: true },
    NavItem { path: "/tareas", label: "Tareas", requires_auth: true },
    NavItem { path: "/dashboard", label: "Panel", requires_auth: true },
    NavItem { path: "/perfil", label: "Perfil", requires_auth: true },
];

/// Sidebar with navigation links and the session-dependent controls.
///
/// Anonymous users see login/register buttons that open the auth modal;
/// logged-in users see their display name and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let client = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();

    let language_menu_open = RwSignal::new(false);

    // Logout completion navigates from an effect; the click handler only
    // spawns the flow and flips this signal when the local clear is done.
    let logged_out = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(ANON_LANDING, NavigateOptions::default());
        }
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let client = client.clone();
        let store = store.clone();
        leptos::task::spawn_local(async move {
            auth::logout(&client, &store, auth).await;
            logged_out.set(true);
        });
    };

    let on_toggle_theme = move |_| {
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };

    let display_name =
        move || auth.get().session.display_name().unwrap_or("Usuario").to_owned();
    let authenticated = move || auth.get().session.is_authenticated();

    view! {
        <aside class="sidebar">
            <div class="sidebar-top">
                <a href="/" class="nav-logo">
                    <span class="logo-text">"Synapse"</span>
                </a>
            </div>

            <nav>
                <ul class="sidebar-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let requires_auth = item.requires_auth;
                            let path = item.path;
                            let label = item.label;
                            view! {
                                <Show when=move || !requires_auth || authenticated()>
                                    <li>
                                        <a href=path class="sidebar-link">
                                            <span class="link-label">{label}</span>
                                        </a>
                                    </li>
                                </Show>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <div class="sidebar-bottom">
                <button class="btn-theme" on:click=on_toggle_theme>
                    {move || match ui.get().theme {
                        crate::state::ui::Theme::Light => "Modo oscuro",
                        crate::state::ui::Theme::Dark => "Modo claro",
                    }}
                </button>

                <div class="language-menu">
                    <button
                        class="btn-language"
                        on:click=move |_| language_menu_open.update(|open| *open = !*open)
                    >
                        {move || ui.get().language.to_uppercase()}
                    </button>
                    <Show when=move || language_menu_open.get()>
                        <div class="language-menu__list">
                            {language::LANGUAGES
                                .iter()
                                .map(|(code, name)| {
                                    let code = *code;
                                    let name = *name;
                                    view! {
                                        <button
                                            class="language-menu__item"
                                            on:click=move |_| {
                                                language::save_preference(code);
                                                ui.update(|u| u.language = code.to_owned());
                                                language_menu_open.set(false);
                                            }
                                        >
                                            {name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <Show
                    when=authenticated
                    fallback=move || {
                        view! {
                            <div class="sidebar-auth">
                                <button
                                    class="btn-login"
                                    on:click=move |_| ui.update(|u| u.open_auth(AuthMode::Login))
                                >
                                    "Iniciar Sesión"
                                </button>
                                <button
                                    class="btn-register"
                                    on:click=move |_| {
                                        ui.update(|u| u.open_auth(AuthMode::Register))
                                    }
                                >
                                    "Registrarse"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="sidebar-auth">
                        <span class="sidebar-auth__name">{display_name}</span>
                        <button class="btn-logout" on:click=on_logout.clone()>
                            "Cerrar sesión"
                        </button>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
