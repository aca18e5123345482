//! Authenticated main screen: header chrome plus the teams overview or
//! the selected team's scoped view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It owns the unauth redirect (including
//! after the HTTP client's forced 401 logout) and the teams/team-view
//! switch driven by the session's team selection.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::team_view::TeamView;
use crate::pages::teams_section::TeamsSection;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn MainPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let email = move || session.get().email().unwrap_or_default().to_owned();
    let on_logout = move |_| session.update(|s| s.logout());

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <div class="main-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="main-page">
                <header class="main-page__header toolbar">
                    <span class="toolbar__title">"Data Catalog"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__email">{email}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <Show
                    when=move || session.get().selected_team().is_some()
                    fallback=|| view! { <TeamsSection/> }
                >
                    <TeamView/>
                </Show>
            </div>
        </Show>
    }
}
