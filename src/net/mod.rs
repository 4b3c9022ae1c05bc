//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP call (auth header injection, error mapping, the 401
//! interceptor) and `types` defines the wire schema shared by all consumers.

pub mod api;
pub mod types;
