//! Scoped view for the selected team: tab strip, the three collection
//! lists, create dialogs, and confirmed deletes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening a team triggers three independent loads (artifacts,
//! contacts, requests) applied through `TeamViewState` so one failing
//! load never blocks the others. Mutations reload from the backend;
//! nothing is patched locally.

#[cfg(test)]
#[path = "team_view_test.rs"]
mod team_view_test;

use leptos::prelude::*;

use crate::components::artifact_card::ArtifactCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::contact_card::ContactCard;
use crate::components::request_card::RequestCard;
use crate::net::types::{ArtifactCreate, ArtifactType, ContactCreate, FieldCreate};
use crate::state::session::SessionState;
use crate::state::team_view::{RequestAction, TeamTab, TeamViewState};

/// A delete awaiting interactive confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingDelete {
    Artifact(i64),
    Contact(i64),
}

fn delete_confirm_message(pending: PendingDelete) -> &'static str {
    match pending {
        PendingDelete::Artifact(_) => "Delete this artifact?",
        PendingDelete::Contact(_) => "Delete this contact?",
    }
}

/// Trim values and require name and project; no other validation.
fn validate_artifact_draft(
    name: &str,
    kind: ArtifactType,
    project_name: &str,
    description: &str,
) -> Option<ArtifactCreate> {
    let name = name.trim();
    let project_name = project_name.trim();
    if name.is_empty() || project_name.is_empty() {
        return None;
    }
    Some(ArtifactCreate {
        name: name.to_owned(),
        kind,
        description: description.trim().to_owned(),
        project_name: project_name.to_owned(),
        developer_id: 1,
    })
}

/// Trim values and require field name and data type.
fn validate_field_draft(
    field_name: &str,
    data_type: &str,
    description: &str,
    is_pk: bool,
) -> Option<FieldCreate> {
    let field_name = field_name.trim();
    let data_type = data_type.trim();
    if field_name.is_empty() || data_type.is_empty() {
        return None;
    }
    Some(FieldCreate {
        field_name: field_name.to_owned(),
        data_type: data_type.to_owned(),
        description: description.trim().to_owned(),
        is_pk,
    })
}

/// Trim values and require the contact name.
fn validate_contact_draft(name: &str, telegram_contact: &str) -> Option<ContactCreate> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(ContactCreate { name: name.to_owned(), telegram_contact: telegram_contact.trim().to_owned() })
}

#[cfg(feature = "hydrate")]
async fn reload_artifacts(
    session: RwSignal<SessionState>,
    view_state: RwSignal<TeamViewState>,
    team_id: i64,
) {
    let result = crate::net::api::team_artifacts(session, team_id).await;
    if let Err(e) = &result {
        leptos::logging::warn!("artifacts load failed: {e}");
    }
    view_state.update(|v| v.apply_artifacts_result(result));
}

#[cfg(feature = "hydrate")]
async fn reload_contacts(
    session: RwSignal<SessionState>,
    view_state: RwSignal<TeamViewState>,
    team_id: i64,
) {
    let result = crate::net::api::team_contacts(session, team_id).await;
    if let Err(e) = &result {
        leptos::logging::warn!("contacts load failed: {e}");
    }
    view_state.update(|v| v.apply_contacts_result(result));
}

#[cfg(feature = "hydrate")]
async fn reload_requests(
    session: RwSignal<SessionState>,
    view_state: RwSignal<TeamViewState>,
    team_id: i64,
) {
    let result = crate::net::api::team_requests(session, team_id).await;
    if let Err(e) = &result {
        leptos::logging::warn!("requests load failed: {e}");
    }
    view_state.update(|v| v.apply_requests_result(result));
}

#[component]
pub(crate) fn TeamView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<TeamViewState>>();

    let team_name = move || {
        session
            .get()
            .selected_team()
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };

    // Fresh state + the three sequential scoped loads on every open.
    let loaded_team = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(team_id) = session.get().selected_team().map(|t| t.id) else {
            return;
        };
        if loaded_team.get_untracked() == Some(team_id) {
            return;
        }
        loaded_team.set(Some(team_id));
        view_state.set(TeamViewState::default());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let artifacts = crate::net::api::team_artifacts(session, team_id).await;
            if let Err(e) = &artifacts {
                leptos::logging::warn!("artifacts load failed: {e}");
            }
            view_state.update(|v| v.apply_artifacts_result(artifacts));

            let contacts = crate::net::api::team_contacts(session, team_id).await;
            if let Err(e) = &contacts {
                leptos::logging::warn!("contacts load failed: {e}");
            }
            view_state.update(|v| v.apply_contacts_result(contacts));

            let requests = crate::net::api::team_requests(session, team_id).await;
            if let Err(e) = &requests {
                leptos::logging::warn!("requests load failed: {e}");
            }
            view_state.update(|v| v.apply_requests_result(requests));
        });
    });

    let on_back = move |_| session.update(|s| s.leave_team());

    let pending_delete = RwSignal::new(None::<PendingDelete>);
    let show_create_artifact = RwSignal::new(false);
    let show_create_contact = RwSignal::new(false);
    let add_field_for = RwSignal::new(None::<i64>);

    let on_artifact_delete = Callback::new(move |artifact_id: i64| {
        pending_delete.set(Some(PendingDelete::Artifact(artifact_id)));
    });
    let on_contact_delete = Callback::new(move |contact_id: i64| {
        pending_delete.set(Some(PendingDelete::Contact(contact_id)));
    });
    let on_add_field = Callback::new(move |artifact_id: i64| {
        add_field_for.set(Some(artifact_id));
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_field_cancel = Callback::new(move |()| add_field_for.set(None));

    // Confirmed delete: one DELETE, then one reload of that list.
    let on_delete_confirm = Callback::new(move |()| {
        let Some(pending) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match pending {
                    PendingDelete::Artifact(artifact_id) => {
                        match crate::net::api::delete_artifact(session, team_id, artifact_id).await {
                            Ok(()) => reload_artifacts(session, view_state, team_id).await,
                            Err(e) => leptos::logging::warn!("artifact delete failed: {e}"),
                        }
                    }
                    PendingDelete::Contact(contact_id) => {
                        match crate::net::api::delete_contact(session, team_id, contact_id).await {
                            Ok(()) => reload_contacts(session, view_state, team_id).await,
                            Err(e) => leptos::logging::warn!("contact delete failed: {e}"),
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
    });

    let on_decide = Callback::new(move |(request_id, action): (i64, RequestAction)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::decide_request(session, team_id, request_id, action).await {
                    Ok(()) => reload_requests(session, view_state, team_id).await,
                    Err(e) => leptos::logging::warn!("request decision failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request_id, action);
    });

    let tab = move || view_state.get().tab;

    view! {
        <section class="team-view">
            <div class="team-view__bar">
                <button class="btn" on:click=on_back>
                    "Back"
                </button>
                <h2 class="team-view__name">{team_name}</h2>
            </div>

            <div class="tabs">
                <button
                    class="tab"
                    class:active=move || tab() == TeamTab::Artifacts
                    on:click=move |_| view_state.update(|v| v.tab = TeamTab::Artifacts)
                >
                    "Artifacts"
                </button>
                <button
                    class="tab"
                    class:active=move || tab() == TeamTab::Contacts
                    on:click=move |_| view_state.update(|v| v.tab = TeamTab::Contacts)
                >
                    "Contacts"
                </button>
                <Show when=move || view_state.get().requests_visible>
                    <button
                        class="tab"
                        class:active=move || tab() == TeamTab::Requests
                        on:click=move |_| view_state.update(|v| v.tab = TeamTab::Requests)
                    >
                        "Requests"
                    </button>
                </Show>
            </div>

            <Show when=move || tab() == TeamTab::Artifacts>
                <div class="tab-content">
                    <div class="tab-content__bar">
                        <button class="btn" on:click=move |_| show_create_artifact.set(true)>
                            "+ New Artifact"
                        </button>
                    </div>
                    <Show
                        when=move || !view_state.get().artifacts.is_empty()
                        fallback=|| view! { <div class="list-item">"No artifacts"</div> }
                    >
                        {move || {
                            view_state
                                .get()
                                .artifacts
                                .into_iter()
                                .map(|artifact| {
                                    view! {
                                        <ArtifactCard
                                            artifact=artifact
                                            on_add_field=on_add_field
                                            on_delete=on_artifact_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            <Show when=move || tab() == TeamTab::Contacts>
                <div class="tab-content">
                    <div class="tab-content__bar">
                        <button class="btn" on:click=move |_| show_create_contact.set(true)>
                            "+ New Contact"
                        </button>
                    </div>
                    <Show
                        when=move || !view_state.get().contacts.is_empty()
                        fallback=|| view! { <div class="list-item">"No contacts"</div> }
                    >
                        {move || {
                            view_state
                                .get()
                                .contacts
                                .into_iter()
                                .map(|contact| {
                                    view! { <ContactCard contact=contact on_delete=on_contact_delete/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            <Show when=move || tab() == TeamTab::Requests>
                <div class="tab-content">
                    <Show
                        when=move || !view_state.get().requests.is_empty()
                        fallback=|| view! { <div class="list-item">"No requests"</div> }
                    >
                        {move || {
                            view_state
                                .get()
                                .requests
                                .into_iter()
                                .map(|request| {
                                    view! { <RequestCard request=request on_decide=on_decide/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            {move || {
                pending_delete
                    .get()
                    .map(|pending| {
                        view! {
                            <ConfirmDialog
                                message=delete_confirm_message(pending).to_owned()
                                on_cancel=on_delete_cancel
                                on_confirm=on_delete_confirm
                            />
                        }
                    })
            }}

            <Show when=move || show_create_artifact.get()>
                <CreateArtifactDialog on_cancel=Callback::new(move |()| show_create_artifact.set(false))/>
            </Show>

            <Show when=move || show_create_contact.get()>
                <CreateContactDialog on_cancel=Callback::new(move |()| show_create_contact.set(false))/>
            </Show>

            {move || {
                add_field_for
                    .get()
                    .map(|artifact_id| {
                        view! { <AddFieldDialog artifact_id=artifact_id on_cancel=on_field_cancel/> }
                    })
            }}
        </section>
    }
}

/// Modal dialog for cataloging a new artifact.
#[component]
fn CreateArtifactDialog(on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<TeamViewState>>();

    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(ArtifactType::Table);
    let project_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Some(payload) =
            validate_artifact_draft(&name.get(), kind.get(), &project_name.get(), &description.get())
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_artifact(session, team_id, &payload).await {
                    Ok(()) => {
                        on_cancel.run(());
                        reload_artifacts(session, view_state, team_id).await;
                    }
                    Err(e) => leptos::logging::warn!("artifact create failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, view_state, payload);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Artifact"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(parsed) = ArtifactType::parse(&event_target_value(&ev)) {
                                kind.set(parsed);
                            }
                        }
                    >
                        {ArtifactType::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option value=t.as_str() selected=move || kind.get() == t>
                                        {t.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Project"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || project_name.get()
                        on:input=move |ev| project_name.set(event_target_value(&ev))
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

/// Modal dialog for adding a field to one artifact. On success the
/// owning card's panel refetches; the whole list does not reload.
#[component]
fn AddFieldDialog(artifact_id: i64, on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<TeamViewState>>();

    let field_name = RwSignal::new(String::new());
    let data_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_pk = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(payload) =
            validate_field_draft(&field_name.get(), &data_type.get(), &description.get(), is_pk.get())
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_field(session, team_id, artifact_id, &payload).await {
                    Ok(()) => {
                        on_cancel.run(());
                        view_state.update(|v| v.notify_fields_created(artifact_id));
                        crate::util::notify::alert("Field created");
                    }
                    Err(e) => {
                        let message = crate::net::api::display_error(&e.to_string());
                        crate::util::notify::alert(&format!("Error: {message}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, view_state, artifact_id, payload);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Field"</h2>
                <label class="dialog__label">
                    "Field name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || field_name.get()
                        on:input=move |ev| field_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Data type"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || data_type.get()
                        on:input=move |ev| data_type.set(event_target_value(&ev))
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
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_pk.get()
                        on:change=move |ev| is_pk.set(event_target_checked(&ev))
                    />
                    " Primary key"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for creating a team contact.
#[component]
fn CreateContactDialog(on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<TeamViewState>>();

    let name = RwSignal::new(String::new());
    let telegram = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Some(payload) = validate_contact_draft(&name.get(), &telegram.get()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_contact(session, team_id, &payload).await {
                    Ok(()) => {
                        on_cancel.run(());
                        reload_contacts(session, view_state, team_id).await;
                    }
                    Err(e) => leptos::logging::warn!("contact create failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, view_state, payload);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Contact"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Telegram"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="@username"
                        prop:value=move || telegram.get()
                        on:input=move |ev| telegram.set(event_target_value(&ev))
                    />
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
