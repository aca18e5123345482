//! Teams overview: membership list, free-text search with join, and the
//! create-team dialog.

#[cfg(test)]
#[path = "teams_section_test.rs"]
mod teams_section_test;

use leptos::prelude::*;

use crate::net::types::TeamCreate;
use crate::state::session::SessionState;
use crate::state::teams::{SearchState, TeamsState};

/// Trim values and require a team name; no other validation.
fn validate_team_draft(name: &str, description: &str) -> Option<TeamCreate> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(TeamCreate { name: name.to_owned(), description: description.trim().to_owned() })
}

/// Trim and require a search term.
fn validate_search_term(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() { None } else { Some(term.to_owned()) }
}

/// Refresh the membership list into shared state.
///
/// # Errors
///
/// Propagates the fetch failure after clearing the loading flag.
#[cfg(feature = "hydrate")]
async fn refresh_my_teams(
    session: RwSignal<SessionState>,
    teams: RwSignal<TeamsState>,
) -> Result<(), crate::net::api::ApiError> {
    teams.update(|s| {
        s.loading = true;
        s.error = None;
    });
    match crate::net::api::my_teams(session).await {
        Ok(items) => {
            teams.update(|s| {
                s.items = items;
                s.loading = false;
                s.loaded = true;
            });
            Ok(())
        }
        Err(e) => {
            teams.update(|s| s.loading = false);
            Err(e)
        }
    }
}

#[component]
pub fn TeamsSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let teams = expect_context::<RwSignal<TeamsState>>();
    let search = expect_context::<RwSignal<SearchState>>();

    // One-shot initial load. A restored token is only optimistic: any
    // failure here forces logout instead of stranding an empty screen.
    Effect::new(move || {
        let state = teams.get();
        if state.loaded || state.loading || !session.get().is_authenticated() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            teams.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                if let Err(e) = refresh_my_teams(session, teams).await {
                    leptos::logging::warn!("team list load failed: {e}");
                    session.update(|s| s.logout());
                }
            });
        }
    });

    let search_term = RwSignal::new(String::new());
    let on_search = move |_| {
        let Some(term) = validate_search_term(&search_term.get()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_teams(session, &term).await {
                Ok(results) => search.set(SearchState { results, visible: true }),
                Err(e) => leptos::logging::warn!("team search failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = term;
    };

    let on_join = move |team_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::join_team(session, team_id).await {
                Ok(()) => crate::util::notify::alert("Request sent"),
                Err(e) => crate::util::notify::alert(&crate::net::api::display_error(&e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = team_id;
    };

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = refresh_my_teams(session, teams).await {
                teams.update(|s| s.error = Some(crate::net::api::display_error(&e.to_string())));
            }
        });
    });

    view! {
        <section class="teams-section">
            <div class="teams-section__bar">
                <h2>"My Teams"</h2>
                <button class="btn" on:click=move |_| show_create.set(true)>
                    "+ New Team"
                </button>
            </div>

            <Show when=move || teams.get().error.is_some()>
                <p class="teams-section__error">{move || teams.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !teams.get().loading
                fallback=|| view! { <p>"Loading teams..."</p> }
            >
                <div class="teams-list">
                    <Show
                        when=move || !teams.get().items.is_empty()
                        fallback=|| view! { <div class="list-item">"No teams found"</div> }
                    >
                        {move || {
                            teams
                                .get()
                                .items
                                .into_iter()
                                .map(|team| {
                                    let open = team.clone();
                                    view! {
                                        <div
                                            class="list-item"
                                            on:click=move |_| {
                                                session.update(|s| s.select_team(open.id, open.name.clone()));
                                            }
                                        >
                                            <h3>{team.name}</h3>
                                            <p>{team.description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            <div class="teams-search">
                <input
                    class="teams-search__input"
                    type="text"
                    placeholder="Search teams"
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
                <button class="btn" on:click=on_search>
                    "Search"
                </button>
            </div>

            <Show when=move || search.get().visible>
                <div class="search-results">
                    <Show
                        when=move || !search.get().results.is_empty()
                        fallback=|| view! { <div class="list-item">"No teams found"</div> }
                    >
                        {move || {
                            search
                                .get()
                                .results
                                .into_iter()
                                .map(|team| {
                                    let open = team.clone();
                                    let team_id = team.id;
                                    view! {
                                        <div
                                            class="list-item"
                                            on:click=move |_| {
                                                session.update(|s| s.select_team(open.id, open.name.clone()));
                                            }
                                        >
                                            <h3>{team.name}</h3>
                                            <p>{team.description}</p>
                                            <div class="actions">
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        on_join(team_id);
                                                    }
                                                >
                                                    "Request access"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreateTeamDialog on_cancel=on_cancel on_created=on_created/>
            </Show>
        </section>
    }
}

/// Modal dialog for creating a new team.
#[component]
fn CreateTeamDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Some(payload) = validate_team_draft(&name.get(), &description.get()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_team(session, &payload).await {
                Ok(_created) => {
                    on_cancel.run(());
                    on_created.run(());
                }
                Err(e) => leptos::logging::warn!("team create failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, payload);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Team"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
