use super::*;

#[test]
fn default_session_is_unauthenticated() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.email(), None);
    assert!(session.selected_team().is_none());
}

#[test]
fn restore_without_persisted_token_stays_logged_out() {
    // Native builds have no storage; restore degrades to a clean session.
    let session = SessionState::restore();
    assert!(!session.is_authenticated());
}

#[test]
fn login_holds_token_and_email() {
    let mut session = SessionState::default();
    session.login("T1".to_owned(), "a@b.com".to_owned());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("T1"));
    assert_eq!(session.email(), Some("a@b.com"));
}

#[test]
fn logout_clears_everything() {
    let mut session = SessionState::default();
    session.login("T1".to_owned(), "a@b.com".to_owned());
    session.select_team(4, "core".to_owned());
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.email(), None);
    assert!(session.selected_team().is_none());
}

#[test]
fn select_team_scopes_one_team_at_a_time() {
    let mut session = SessionState::default();
    session.login("T1".to_owned(), "a@b.com".to_owned());
    session.select_team(4, "core".to_owned());
    assert_eq!(session.selected_team(), Some(&SelectedTeam { id: 4, name: "core".to_owned() }));
    session.select_team(9, "data".to_owned());
    assert_eq!(session.selected_team().map(|t| t.id), Some(9));
    session.leave_team();
    assert!(session.selected_team().is_none());
}

#[test]
fn fresh_login_drops_previous_selection() {
    let mut session = SessionState::default();
    session.login("T1".to_owned(), "a@b.com".to_owned());
    session.select_team(4, "core".to_owned());
    session.login("T2".to_owned(), "c@d.com".to_owned());
    assert_eq!(session.token(), Some("T2"));
    assert!(session.selected_team().is_none());
}
