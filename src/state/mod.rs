//! Shared reactive state provided via Leptos context at the app root.
//!
//! ARCHITECTURE
//! ============
//! `session` is the single authority on "who is logged in right now";
//! `alerts` and `admin` hold page-scoped inventories so a failed list fetch
//! never disturbs the session.

pub mod admin;
pub mod alerts;
pub mod session;
