//! Team-list and search state for the main screen.
//!
//! DESIGN
//! ======
//! Separating the membership list from search results keeps the join
//! flow from disturbing navigation inventory.

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use crate::net::types::Team;

/// Teams the current user belongs to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamsState {
    pub items: Vec<Team>,
    pub loading: bool,
    /// True once the initial refresh has succeeded for this session.
    pub loaded: bool,
    pub error: Option<String>,
}

/// Free-text search results; hidden until a search has run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<Team>,
    pub visible: bool,
}
