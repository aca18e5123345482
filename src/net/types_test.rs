use super::*;

#[test]
fn artifact_type_round_trips_lowercase() {
    for kind in ArtifactType::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        let back: ArtifactType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn artifact_type_parse_matches_wire_names() {
    assert_eq!(ArtifactType::parse("dataset"), Some(ArtifactType::Dataset));
    assert_eq!(ArtifactType::parse("spreadsheet"), None);
}

#[test]
fn artifact_deserializes_backend_shape() {
    let artifact: Artifact = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "orders",
        "type": "table",
        "description": "raw orders",
        "project_name": "billing",
        "developer_id": 1,
        "created_at": "2024-04-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(artifact.id, 7);
    assert_eq!(artifact.kind, ArtifactType::Table);
    assert_eq!(artifact.project_name, "billing");
}

#[test]
fn artifact_description_defaults_empty() {
    let artifact: Artifact = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "a",
        "type": "view",
        "project_name": "p"
    }))
    .unwrap();
    assert_eq!(artifact.description, "");
    assert_eq!(artifact.developer_id, 0);
}

#[test]
fn artifact_create_serializes_type_key() {
    let payload = ArtifactCreate {
        name: "orders".to_owned(),
        kind: ArtifactType::Api,
        description: String::new(),
        project_name: "billing".to_owned(),
        developer_id: 1,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "api");
    assert_eq!(value["developer_id"], 1);
}

#[test]
fn join_request_status_round_trips() {
    let request: JoinRequest = serde_json::from_value(serde_json::json!({
        "id": 3,
        "user_id": 12,
        "status": "pending",
        "created_at": "2024-04-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.status.as_str(), "pending");
}

#[test]
fn field_is_pk_defaults_false() {
    let field: ArtifactField = serde_json::from_value(serde_json::json!({
        "field_name": "id",
        "data_type": "bigint"
    }))
    .unwrap();
    assert!(!field.is_pk);
}

#[test]
fn auth_response_carries_token() {
    let auth: AuthResponse = serde_json::from_str(r#"{"token":"T1"}"#).unwrap();
    assert_eq!(auth.token, "T1");
}
