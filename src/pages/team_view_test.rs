use super::*;

// =============================================================
// Artifact draft
// =============================================================

#[test]
fn artifact_draft_requires_name_and_project() {
    assert_eq!(validate_artifact_draft("", ArtifactType::Table, "billing", ""), None);
    assert_eq!(validate_artifact_draft("orders", ArtifactType::Table, "  ", ""), None);
}

#[test]
fn artifact_draft_trims_and_defaults_developer() {
    let payload =
        validate_artifact_draft(" orders ", ArtifactType::Dataset, " billing ", " raw ").unwrap();
    assert_eq!(payload.name, "orders");
    assert_eq!(payload.kind, ArtifactType::Dataset);
    assert_eq!(payload.project_name, "billing");
    assert_eq!(payload.description, "raw");
    assert_eq!(payload.developer_id, 1);
}

// =============================================================
// Field draft
// =============================================================

#[test]
fn field_draft_requires_name_and_data_type() {
    assert_eq!(validate_field_draft("", "bigint", "", false), None);
    assert_eq!(validate_field_draft("id", "  ", "", false), None);
}

#[test]
fn field_draft_keeps_pk_flag() {
    let payload = validate_field_draft(" id ", " bigint ", "", true).unwrap();
    assert_eq!(payload.field_name, "id");
    assert_eq!(payload.data_type, "bigint");
    assert!(payload.is_pk);
}

// =============================================================
// Contact draft
// =============================================================

#[test]
fn contact_draft_requires_name_only() {
    assert_eq!(validate_contact_draft("  ", "@ada"), None);
    let payload = validate_contact_draft(" Ada ", " @ada ").unwrap();
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.telegram_contact, "@ada");
}

#[test]
fn contact_draft_allows_empty_telegram() {
    let payload = validate_contact_draft("Ada", "").unwrap();
    assert_eq!(payload.telegram_contact, "");
}

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn delete_confirm_messages_name_the_entity() {
    assert_eq!(delete_confirm_message(PendingDelete::Artifact(1)), "Delete this artifact?");
    assert_eq!(delete_confirm_message(PendingDelete::Contact(1)), "Delete this contact?");
}
