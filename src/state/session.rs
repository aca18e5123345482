//! Session context for the current browser user.
//!
//! DESIGN
//! ======
//! All session changes go through the named transitions below; nothing
//! else mutates the fields. The persisted token is written/cleared only
//! here, so the storage key cannot drift out of sync with memory.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// The team currently scoping the artifact/contact/request views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedTeam {
    pub id: i64,
    pub name: String,
}

/// Authentication and selection state for this browser context.
///
/// Exactly one session exists per context, provided as an `RwSignal`
/// from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    email: Option<String>,
    selected_team: Option<SelectedTeam>,
}

impl SessionState {
    /// Restore a session from durable storage (startup path). A stored
    /// token yields an optimistically authenticated session; the first
    /// failing request forces logout.
    pub fn restore() -> Self {
        Self { token: storage::load_token(), email: None, selected_team: None }
    }

    /// Login/register success: hold the token and persist it.
    pub fn login(&mut self, token: String, email: String) {
        storage::save_token(&token);
        self.token = Some(token);
        self.email = Some(email);
        self.selected_team = None;
    }

    /// Explicit logout or forced 401 teardown: drop the token from
    /// memory and durable storage.
    pub fn logout(&mut self) {
        storage::clear_token();
        self.token = None;
        self.email = None;
        self.selected_team = None;
    }

    /// Make `team` the one selection scoping the team views.
    pub fn select_team(&mut self, id: i64, name: String) {
        self.selected_team = Some(SelectedTeam { id, name });
    }

    /// Back to the teams overview.
    pub fn leave_team(&mut self) {
        self.selected_team = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn selected_team(&self) -> Option<&SelectedTeam> {
        self.selected_team.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
