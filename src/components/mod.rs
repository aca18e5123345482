//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list rows and shared dialogs while reading/writing
//! shared state from Leptos context providers.

pub mod artifact_card;
pub mod confirm_dialog;
pub mod contact_card;
pub mod request_card;
