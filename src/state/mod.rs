//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one slice of state as a plain struct held in an
//! `RwSignal`; pages and components read/write through the signals and
//! the session's named transitions.

pub mod session;
pub mod team_view;
pub mod teams;
