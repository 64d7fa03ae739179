//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `session` keeps the shared `AuthState` in sync
//! with the server, and `types` defines the wire schema and login errors.

pub mod api;
pub mod session;
pub mod types;
