//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items while reading shared state
//! from Leptos context providers; the guards gate whole route subtrees.

pub mod alert_card;
pub mod error_banner;
pub mod guard;
pub mod nav_bar;
