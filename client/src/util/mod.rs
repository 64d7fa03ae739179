//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route constants and guard helpers live here so pages and the login flow
//! agree on navigation targets.

pub mod auth;
pub mod routes;
