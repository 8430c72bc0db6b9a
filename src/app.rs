//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::auth_modal::AuthModal;
use crate::components::guards::{RequireAnon, RequireAuth};
use crate::components::navbar::Navbar;
use crate::net::{ApiClient, ApiConfig};
use crate::pages::{
    dashboard::DashboardPage, focus::FocusPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, tasks::TasksPage,
};
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{language, theme};

/// Root application component.
///
/// Owns the session store and API client, bootstraps the session snapshot
/// and the persisted theme/language, and sets up client-side routing with
/// the two guard policies.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let client = ApiClient::new(ApiConfig::default(), store.clone());

    let auth = RwSignal::new(AuthState::from_store(&store));
    let ui = RwSignal::new(UiState {
        theme: theme::read_preference(),
        language: language::read_preference(),
        ..UiState::default()
    });
    theme::apply(ui.get_untracked().theme);

    provide_context(store);
    provide_context(client);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/synapse.css"/>
        <Title text="Synapse"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RequireAnon><LoginPage/></RequireAnon> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RequireAnon><RegisterPage/></RequireAnon> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("perfil")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("concentracion")
                        view=|| view! { <RequireAuth><FocusPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("tareas")
                        view=|| view! { <RequireAuth><TasksPage/></RequireAuth> }
                    />
                </Routes>
            </main>
            <AuthModal/>
        </Router>
    }
}
