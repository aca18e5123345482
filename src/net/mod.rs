//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the authenticated HTTP client and typed endpoint wrappers;
//! `types` defines the wire DTOs shared by state and views.

pub mod api;
pub mod types;
