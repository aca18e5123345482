//! Artifact row with inline actions and the lazy field panel.
//!
//! DESIGN
//! ======
//! The field sub-list is fetched only when asked for and lives in this
//! card's local signal, never in shared state, so re-showing re-fetches
//! and a stale panel cannot outlive a reload of the artifact list.

#[cfg(test)]
#[path = "artifact_card_test.rs"]
mod artifact_card_test;

use leptos::prelude::*;

use crate::net::types::{Artifact, ArtifactField};
use crate::state::session::SessionState;
use crate::state::team_view::{ArtifactAction, TeamViewState};

/// Suffix for primary-key fields in the panel.
fn pk_suffix(is_pk: bool) -> &'static str {
    if is_pk { " (PK)" } else { "" }
}

/// A clickable list row for one artifact, with embedded action buttons
/// that never bubble into the row itself.
#[component]
pub fn ArtifactCard(
    artifact: Artifact,
    on_add_field: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<TeamViewState>>();

    let artifact_id = artifact.id;
    let fields = RwSignal::new(Vec::<ArtifactField>::new());
    let fields_shown = RwSignal::new(false);

    let load_fields = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(team_id) = session.get_untracked().selected_team().map(|t| t.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::artifact_fields(session, team_id, artifact_id).await {
                    Ok(items) => {
                        fields.set(items);
                        fields_shown.set(true);
                    }
                    Err(e) => leptos::logging::warn!("fields load failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, fields, fields_shown, artifact_id);
        }
    };

    // Exhaustive dispatch for the row's embedded actions.
    let dispatch = Callback::new(move |action: ArtifactAction| match action {
        ArtifactAction::ShowFields => load_fields(),
        ArtifactAction::AddField => on_add_field.run(artifact_id),
        ArtifactAction::Delete => on_delete.run(artifact_id),
    });

    // Refetch the panel when a field was just created for this artifact.
    let seen_seq = RwSignal::new(view_state.get_untracked().fields_refresh_seq);
    Effect::new(move || {
        let state = view_state.get();
        if state.fields_refresh_seq == seen_seq.get_untracked() {
            return;
        }
        seen_seq.set(state.fields_refresh_seq);
        if state.fields_refresh_artifact == Some(artifact_id) {
            load_fields();
        }
    });

    let meta = format!("Project: {} • ID: {}", artifact.project_name, artifact.id);

    view! {
        <div class="list-item">
            <h3>
                {artifact.name}
                " "
                <span class="badge">{artifact.kind.as_str()}</span>
            </h3>
            <p>{artifact.description}</p>
            <div class="meta">{meta}</div>
            <div class="actions">
                <button
                    class="btn btn-small"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        dispatch.run(ArtifactAction::ShowFields);
                    }
                >
                    "Fields"
                </button>
                <button
                    class="btn btn-small"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        dispatch.run(ArtifactAction::AddField);
                    }
                >
                    "+ Field"
                </button>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        dispatch.run(ArtifactAction::Delete);
                    }
                >
                    "Delete"
                </button>
            </div>
            <Show when=move || fields_shown.get()>
                <div class="fields">
                    <Show
                        when=move || !fields.get().is_empty()
                        fallback=|| view! { <div class="fields__empty">"No fields"</div> }
                    >
                        {move || {
                            fields
                                .get()
                                .into_iter()
                                .map(|f| {
                                    let summary = format!(": {}{}", f.data_type, pk_suffix(f.is_pk));
                                    view! {
                                        <div class="fields__row">
                                            <b>{f.field_name}</b>
                                            {summary}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}
