use super::*;
use crate::net::types::ArtifactType;

// =============================================================
// Header merging
// =============================================================

#[test]
fn merged_headers_injects_bearer_token() {
    let headers = merged_headers(Some("T1"), &[], false);
    assert_eq!(headers, vec![("Authorization".to_owned(), "Bearer T1".to_owned())]);
}

#[test]
fn merged_headers_keeps_explicit_auth_header() {
    let supplied = vec![("Authorization".to_owned(), "Bearer other".to_owned())];
    let headers = merged_headers(Some("T1"), &supplied, false);
    assert_eq!(headers, supplied);
}

#[test]
fn merged_headers_auth_match_is_case_insensitive() {
    let supplied = vec![("authorization".to_owned(), "Basic abc".to_owned())];
    let headers = merged_headers(Some("T1"), &supplied, false);
    assert_eq!(headers, supplied);
}

#[test]
fn merged_headers_without_token_adds_nothing() {
    assert!(merged_headers(None, &[], false).is_empty());
}

#[test]
fn merged_headers_defaults_content_type_only_with_body() {
    let with_body = merged_headers(None, &[], true);
    assert_eq!(with_body, vec![("Content-Type".to_owned(), "application/json".to_owned())]);
    assert!(merged_headers(None, &[], false).is_empty());
}

#[test]
fn merged_headers_keeps_explicit_content_type() {
    let supplied = vec![("content-type".to_owned(), "text/plain".to_owned())];
    let headers = merged_headers(None, &supplied, true);
    assert_eq!(headers, supplied);
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_body_parses_json_content_type() {
    let body = decode_body(Some("application/json"), r#"{"ok":true}"#.to_owned()).unwrap();
    assert_eq!(body, ApiBody::Json(serde_json::json!({ "ok": true })));
}

#[test]
fn decode_body_handles_charset_suffix() {
    let body = decode_body(Some("application/json; charset=utf-8"), "[]".to_owned()).unwrap();
    assert_eq!(body, ApiBody::Json(serde_json::json!([])));
}

#[test]
fn decode_body_returns_text_for_other_content_types() {
    let body = decode_body(Some("text/plain"), "ok".to_owned()).unwrap();
    assert_eq!(body, ApiBody::Text("ok".to_owned()));
    let body = decode_body(None, "ok".to_owned()).unwrap();
    assert_eq!(body, ApiBody::Text("ok".to_owned()));
}

#[test]
fn decode_body_rejects_malformed_json() {
    let err = decode_body(Some("application/json"), "{not json".to_owned()).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_json_reads_auth_response() {
    let body = ApiBody::Json(serde_json::json!({ "token": "T1" }));
    let auth: AuthResponse = decode_json(body).unwrap();
    assert_eq!(auth.token, "T1");
}

#[test]
fn decode_json_rejects_text_body() {
    let err = decode_json::<AuthResponse>(ApiBody::Text("ok".to_owned())).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn list_from_body_decodes_array() {
    let body = ApiBody::Json(serde_json::json!([
        { "id": 1, "name": "core", "description": "" }
    ]));
    let teams: Vec<crate::net::types::Team> = list_from_body(body).unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "core");
}

#[test]
fn list_from_body_empty_array_yields_empty_list() {
    let teams: Vec<crate::net::types::Team> = list_from_body(ApiBody::Json(serde_json::json!([]))).unwrap();
    assert!(teams.is_empty());
}

#[test]
fn list_from_body_non_array_yields_empty_list() {
    let body = ApiBody::Json(serde_json::json!({ "error": "nope" }));
    let teams: Vec<crate::net::types::Team> = list_from_body(body).unwrap();
    assert!(teams.is_empty());
    let teams: Vec<crate::net::types::Team> = list_from_body(ApiBody::Text("ok".to_owned())).unwrap();
    assert!(teams.is_empty());
}

// =============================================================
// Error shaping
// =============================================================

#[test]
fn error_message_prefers_body_text() {
    assert_eq!(error_message(r#"{"error":"forbidden"}"#, "Forbidden"), r#"{"error":"forbidden"}"#);
    assert_eq!(error_message("", "Forbidden"), "Forbidden");
}

#[test]
fn display_error_prefers_json_error_field() {
    assert_eq!(display_error(r#"{"error":"invalid credentials"}"#), "invalid credentials");
}

#[test]
fn display_error_falls_back_to_raw_text() {
    assert_eq!(display_error("boom"), "boom");
    assert_eq!(display_error(r#"{"message":"x"}"#), r#"{"message":"x"}"#);
}

#[test]
fn api_error_unauthorized_is_status_401() {
    let err = ApiError::Status { status: 401, message: "unauthorized".to_owned() };
    assert!(err.is_unauthorized());
    let err = ApiError::Status { status: 403, message: "forbidden".to_owned() };
    assert!(!err.is_unauthorized());
    assert!(!ApiError::Network("down".to_owned()).is_unauthorized());
}

// =============================================================
// Requests and paths
// =============================================================

#[test]
fn api_request_json_serializes_body_without_content_type() {
    let req = ApiRequest::post("/teams")
        .json(&serde_json::json!({ "name": "core" }))
        .unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body.as_deref(), Some(r#"{"name":"core"}"#));
    assert!(req.headers.is_empty());
}

#[test]
fn delete_and_reload_paths_line_up() {
    // Confirmed artifact delete issues exactly this DELETE, then reloads
    // from exactly this collection path.
    assert_eq!(artifact_path(5, 9), "/teams/5/artifacts/9");
    assert_eq!(team_artifacts_path(5), "/teams/5/artifacts");
}

#[test]
fn team_scoped_paths_format_expected_routes() {
    assert_eq!(search_teams_path("ware%20house"), "/teams?search=ware%20house");
    assert_eq!(join_team_path(3), "/teams/3/join");
    assert_eq!(artifact_fields_path(3, 4), "/teams/3/artifacts/4/fields");
    assert_eq!(team_contacts_path(3), "/teams/3/contacts");
    assert_eq!(contact_path(3, 8), "/teams/3/contacts/8");
    assert_eq!(team_requests_path(3), "/teams/3/requests");
}

#[test]
fn request_decision_paths_cover_both_actions() {
    use crate::state::team_view::RequestAction;
    assert_eq!(request_decision_path(3, 7, RequestAction::Approve), "/teams/3/requests/7/approve");
    assert_eq!(request_decision_path(3, 7, RequestAction::Reject), "/teams/3/requests/7/reject");
}

#[test]
fn artifact_type_values_match_form_options() {
    assert_eq!(ArtifactType::ALL.len(), 8);
    assert_eq!(ArtifactType::ALL[0].as_str(), "table");
}
