//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form handling, fetch kickoff,
//! redirects) and delegates session mutations to `state::session`.

pub mod account;
pub mod admin;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod onboarding;
pub mod register;
pub mod reset_password;
