//! Login page with combined sign-in and registration forms.
//!
//! Auth failures surface inline in the error region; the backend is the
//! validator here, so only whitespace trimming happens client-side.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::team_view::TeamViewState;
use crate::state::teams::{SearchState, TeamsState};

/// Trim the email; passwords are sent as typed.
fn trimmed_credentials(email: &str, password: &str) -> (String, String) {
    (email.trim().to_owned(), password.to_owned())
}

/// Registration additionally trims the display name.
fn trimmed_registration(email: &str, password: &str, name: &str) -> (String, String, String) {
    (email.trim().to_owned(), password.to_owned(), name.trim().to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let teams = expect_context::<RwSignal<TeamsState>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let team_view = expect_context::<RwSignal<TeamViewState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Auth success: reset per-identity state, record the session, and
    // land on the main screen (which triggers the team list refresh).
    let finish = move |token: String, email_value: String| {
        teams.set(TeamsState::default());
        search.set(SearchState::default());
        team_view.set(TeamViewState::default());
        session.update(|s| s.login(token, email_value));
    };

    let navigate_login = navigate.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = trimmed_credentials(&email.get(), &password.get());
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_login.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(session, &email_value, &password_value).await {
                    Ok(token) => {
                        finish(token, email_value.clone());
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => error.set(crate::net::api::display_error(&e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_login, &finish, email_value, password_value);
            busy.set(false);
        }
    };

    let navigate_register = navigate.clone();
    let on_register = move |_ev: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let (email_value, password_value, name_value) =
            trimmed_registration(&email.get(), &password.get(), &name.get());
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_register.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(session, &email_value, &password_value, &name_value).await
                {
                    Ok(token) => {
                        finish(token, email_value.clone());
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => error.set(crate::net::api::display_error(&e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_register, &finish, email_value, password_value, name_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Data Catalog"</h1>
                <form class="auth-form" on:submit=on_login>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name (for registration)"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <div class="auth-actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                        <button
                            class="btn"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_register
                        >
                            "Register"
                        </button>
                    </div>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
