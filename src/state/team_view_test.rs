use super::*;
use crate::net::types::{ArtifactType, RequestStatus};

fn artifact(id: i64) -> Artifact {
    Artifact {
        id,
        name: format!("artifact-{id}"),
        kind: ArtifactType::Table,
        description: String::new(),
        project_name: "billing".to_owned(),
        developer_id: 1,
    }
}

fn request(id: i64) -> JoinRequest {
    JoinRequest { id, user_id: 1, status: RequestStatus::Pending, created_at: String::new() }
}

fn forbidden() -> ApiError {
    ApiError::Status { status: 403, message: "forbidden".to_owned() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn team_view_defaults_to_artifacts_tab_with_requests_hidden() {
    let view = TeamViewState::default();
    assert_eq!(view.tab, TeamTab::Artifacts);
    assert!(!view.requests_visible);
    assert!(view.artifacts.is_empty());
    assert!(view.contacts.is_empty());
    assert!(view.requests.is_empty());
    assert_eq!(view.fields_refresh_seq, 0);
}

#[test]
fn team_tab_variants_are_distinct() {
    assert_ne!(TeamTab::Artifacts, TeamTab::Contacts);
    assert_ne!(TeamTab::Artifacts, TeamTab::Requests);
    assert_ne!(TeamTab::Contacts, TeamTab::Requests);
}

// =============================================================
// Scoped load application
// =============================================================

#[test]
fn apply_artifacts_result_sets_items_on_success() {
    let mut view = TeamViewState::default();
    view.apply_artifacts_result(Ok(vec![artifact(1), artifact(2)]));
    assert_eq!(view.artifacts.len(), 2);
}

#[test]
fn apply_artifacts_result_clears_on_failure() {
    let mut view = TeamViewState::default();
    view.apply_artifacts_result(Ok(vec![artifact(1)]));
    view.apply_artifacts_result(Err(forbidden()));
    assert!(view.artifacts.is_empty());
}

#[test]
fn apply_requests_result_shows_tab_on_success() {
    let mut view = TeamViewState::default();
    view.apply_requests_result(Ok(vec![request(1)]));
    assert!(view.requests_visible);
    assert_eq!(view.requests.len(), 1);
}

#[test]
fn apply_requests_result_hides_tab_on_failure() {
    let mut view = TeamViewState::default();
    view.apply_requests_result(Ok(vec![request(1)]));
    view.tab = TeamTab::Requests;
    view.apply_requests_result(Err(forbidden()));
    assert!(!view.requests_visible);
    assert!(view.requests.is_empty());
    assert_eq!(view.tab, TeamTab::Artifacts);
}

#[test]
fn requests_failure_leaves_other_collections_untouched() {
    let mut view = TeamViewState::default();
    view.apply_artifacts_result(Ok(vec![artifact(1)]));
    view.apply_contacts_result(Ok(vec![crate::net::types::Contact {
        id: 1,
        name: "Ada".to_owned(),
        telegram_contact: "@ada".to_owned(),
    }]));
    view.apply_requests_result(Err(forbidden()));
    assert_eq!(view.artifacts.len(), 1);
    assert_eq!(view.contacts.len(), 1);
}

#[test]
fn artifacts_failure_leaves_requests_untouched() {
    let mut view = TeamViewState::default();
    view.apply_requests_result(Ok(vec![request(1)]));
    view.apply_artifacts_result(Err(forbidden()));
    assert!(view.requests_visible);
    assert_eq!(view.requests.len(), 1);
}

// =============================================================
// Field refresh signaling
// =============================================================

#[test]
fn notify_fields_created_bumps_seq_for_artifact() {
    let mut view = TeamViewState::default();
    view.notify_fields_created(7);
    assert_eq!(view.fields_refresh_seq, 1);
    assert_eq!(view.fields_refresh_artifact, Some(7));
    view.notify_fields_created(9);
    assert_eq!(view.fields_refresh_seq, 2);
    assert_eq!(view.fields_refresh_artifact, Some(9));
}

// =============================================================
// Action enums
// =============================================================

#[test]
fn request_action_path_segments() {
    assert_eq!(RequestAction::Approve.as_str(), "approve");
    assert_eq!(RequestAction::Reject.as_str(), "reject");
}

#[test]
fn artifact_action_variants_are_distinct() {
    assert_ne!(ArtifactAction::ShowFields, ArtifactAction::AddField);
    assert_ne!(ArtifactAction::ShowFields, ArtifactAction::Delete);
    assert_ne!(ArtifactAction::AddField, ArtifactAction::Delete);
}
