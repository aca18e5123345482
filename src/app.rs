//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, main::MainPage};
use crate::state::session::SessionState;
use crate::state::team_view::TeamViewState;
use crate::state::teams::{SearchState, TeamsState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// The session is restored from durable storage exactly once, here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let teams = RwSignal::new(TeamsState::default());
    let search = RwSignal::new(SearchState::default());
    let team_view = RwSignal::new(TeamViewState::default());

    provide_context(session);
    provide_context(teams);
    provide_context(search);
    provide_context(team_view);

    view! {
        <Title text="Data Catalog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=MainPage/>
            </Routes>
        </Router>
    }
}
