use super::*;

#[test]
fn validate_team_draft_requires_name() {
    // An empty or blank name never reaches the network layer.
    assert_eq!(validate_team_draft("", "desc"), None);
    assert_eq!(validate_team_draft("   ", "desc"), None);
}

#[test]
fn validate_team_draft_trims_fields() {
    let payload = validate_team_draft("  core ", "  data platform ").unwrap();
    assert_eq!(payload.name, "core");
    assert_eq!(payload.description, "data platform");
}

#[test]
fn validate_team_draft_allows_empty_description() {
    let payload = validate_team_draft("core", "").unwrap();
    assert_eq!(payload.description, "");
}

#[test]
fn validate_search_term_requires_text() {
    assert_eq!(validate_search_term("  "), None);
    assert_eq!(validate_search_term(" warehouse "), Some("warehouse".to_owned()));
}
