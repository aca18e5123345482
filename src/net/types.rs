//! REST DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON exactly (integer ids, lowercase
//! enums, ISO-8601 timestamps as strings) so serde round-trips stay
//! lossless and list rendering can stay schema-driven. Records pass
//! through unmodified; the client never derives fields of its own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A team: the tenant grouping that owns artifacts, contacts, and
/// membership requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Backend-assigned team identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
}

/// Kind of cataloged data object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Table,
    View,
    Procedure,
    Function,
    Index,
    Dataset,
    Api,
    File,
}

impl ArtifactType {
    /// All kinds offered by the create-artifact form, in display order.
    pub const ALL: [ArtifactType; 8] = [
        ArtifactType::Table,
        ArtifactType::View,
        ArtifactType::Procedure,
        ArtifactType::Function,
        ArtifactType::Index,
        ArtifactType::Dataset,
        ArtifactType::Api,
        ArtifactType::File,
    ];

    /// Lowercase wire name, also used as the badge label.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactType::Table => "table",
            ArtifactType::View => "view",
            ArtifactType::Procedure => "procedure",
            ArtifactType::Function => "function",
            ArtifactType::Index => "index",
            ArtifactType::Dataset => "dataset",
            ArtifactType::Api => "api",
            ArtifactType::File => "file",
        }
    }

    /// Parse a wire name back into a kind (used by the form select).
    pub fn parse(value: &str) -> Option<ArtifactType> {
        ArtifactType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A cataloged data object owned by a team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Backend-assigned artifact identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Kind of object.
    #[serde(rename = "type")]
    pub kind: ArtifactType,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Project the artifact belongs to.
    pub project_name: String,
    /// Identifier of the responsible developer.
    #[serde(default)]
    pub developer_id: i64,
}

/// A named, typed attribute of an artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactField {
    pub field_name: String,
    pub data_type: String,
    #[serde(default)]
    pub description: String,
    /// Whether the field is part of the primary key.
    #[serde(default)]
    pub is_pk: bool,
}

/// A team contact entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub telegram_contact: String,
}

/// Lifecycle state of a membership request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// A pending/approved/rejected request by a user to join a team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: i64,
    /// User asking to join.
    pub user_id: i64,
    pub status: RequestStatus,
    /// ISO-8601 creation timestamp, rendered as-is.
    #[serde(default)]
    pub created_at: String,
}

/// Reply shape of `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Payload for `POST /teams`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamCreate {
    pub name: String,
    pub description: String,
}

/// Payload for `POST /teams/{id}/artifacts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtifactCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtifactType,
    pub description: String,
    pub project_name: String,
    pub developer_id: i64,
}

/// Payload for `POST /teams/{id}/artifacts/{artifactId}/fields`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldCreate {
    pub field_name: String,
    pub data_type: String,
    pub description: String,
    pub is_pk: bool,
}

/// Payload for `POST /teams/{id}/contacts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactCreate {
    pub name: String,
    pub telegram_contact: String,
}
