//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and credential concerns from page and
//! component logic: `auth_storage` wraps localStorage, `token` decodes the
//! bearer credential, and `auth` holds the session-oracle predicates the
//! route guards share.

pub mod auth;
pub mod auth_storage;
pub mod token;
