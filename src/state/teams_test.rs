use super::*;

#[test]
fn teams_state_defaults() {
    let s = TeamsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.loaded);
    assert!(s.error.is_none());
}

#[test]
fn search_state_hidden_until_first_search() {
    let s = SearchState::default();
    assert!(s.results.is_empty());
    assert!(!s.visible);
}
