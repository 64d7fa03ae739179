//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `faq`, `login`, `toast`) so pages and
//! components depend on small focused models. Each model is a plain struct;
//! the Leptos layer wraps it in `RwSignal` and provides it via context.

pub mod auth;
pub mod faq;
pub mod login;
pub mod toast;
