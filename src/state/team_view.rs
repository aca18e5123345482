//! Scoped view state for the selected team.
//!
//! DESIGN
//! ======
//! The three collection loads are independent: each is applied through
//! its own `apply_*_result` so one failing load cannot disturb the
//! others. The requests load doubles as the permission probe; any
//! failure hides that tab instead of surfacing an error.

#[cfg(test)]
#[path = "team_view_test.rs"]
mod team_view_test;

use crate::net::api::ApiError;
use crate::net::types::{Artifact, Contact, JoinRequest};

/// Tabs of the team view. Artifacts is the landing tab on every open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamTab {
    #[default]
    Artifacts,
    Contacts,
    Requests,
}

/// Row-level actions on an artifact card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactAction {
    /// Fetch and show the field sub-list.
    ShowFields,
    /// Open the add-field dialog.
    AddField,
    /// Delete after confirmation.
    Delete,
}

/// Decision actions on a pending membership request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    /// Path segment of the decision endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
        }
    }
}

/// Collections and chrome state scoping the selected team.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamViewState {
    pub artifacts: Vec<Artifact>,
    pub contacts: Vec<Contact>,
    pub requests: Vec<JoinRequest>,
    /// Whether the requests tab is offered at all; stays hidden until a
    /// requests load succeeds.
    pub requests_visible: bool,
    pub tab: TeamTab,
    /// Bumped when a field was created, so the one artifact card
    /// re-renders its field panel instead of the whole list reloading.
    pub fields_refresh_seq: u64,
    pub fields_refresh_artifact: Option<i64>,
}

impl TeamViewState {
    /// Apply the artifacts load. A failure clears only this list.
    pub fn apply_artifacts_result(&mut self, result: Result<Vec<Artifact>, ApiError>) {
        self.artifacts = result.unwrap_or_default();
    }

    /// Apply the contacts load. A failure clears only this list.
    pub fn apply_contacts_result(&mut self, result: Result<Vec<Contact>, ApiError>) {
        self.contacts = result.unwrap_or_default();
    }

    /// Apply the requests load. Success shows the tab; any failure
    /// (typically a permission rejection) hides it and, if it was
    /// active, falls back to the artifacts tab.
    pub fn apply_requests_result(&mut self, result: Result<Vec<JoinRequest>, ApiError>) {
        match result {
            Ok(items) => {
                self.requests = items;
                self.requests_visible = true;
            }
            Err(_) => {
                self.requests = Vec::new();
                self.requests_visible = false;
                if self.tab == TeamTab::Requests {
                    self.tab = TeamTab::Artifacts;
                }
            }
        }
    }

    /// Record a created field so the owning card refetches its panel.
    pub fn notify_fields_created(&mut self, artifact_id: i64) {
        self.fields_refresh_seq += 1;
        self.fields_refresh_artifact = Some(artifact_id);
    }
}
