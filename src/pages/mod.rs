//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` and `main` are the two routes; the teams overview and team
//! view are route-scoped sections owned by `main`.

pub mod login;
pub mod main;
pub(crate) mod team_view;
pub(crate) mod teams_section;
