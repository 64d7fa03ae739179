//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read/write shared state from Leptos
//! context providers or from signals passed in by their page.

pub mod faq_item;
pub mod navigation;
pub mod toaster;
