//! Session oracle: stateless predicates over the stored credential and the
//! cached profile, plus the redirect rules the route guards share.
//!
//! SYSTEM CONTEXT
//! ==============
//! These predicates answer "is someone plausibly logged in" from storage
//! alone, before the once-per-load profile revalidation finishes. Role flags
//! read the cache and may lag the server until the next fetch; the live
//! session state is preferred by UI whenever it is available.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Profile, SubscriptionType};
use crate::state::session::SessionState;
use crate::util::auth_storage;
use crate::util::token::{self, TokenStatus};

/// Verdict on the stored credential, including whether the store must be
/// emptied before answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialGate {
    Allow,
    Deny,
    /// An expired or undecodable credential is present; it must be cleared
    /// so stale entries cannot leak into later reads.
    DenyAndClear,
}

pub(crate) fn gate_for(status: TokenStatus) -> CredentialGate {
    match status {
        TokenStatus::Valid => CredentialGate::Allow,
        TokenStatus::Missing => CredentialGate::Deny,
        TokenStatus::Invalid => CredentialGate::DenyAndClear,
    }
}

/// True iff a stored credential exists and has not expired.
///
/// Side effect: a [`CredentialGate::DenyAndClear`] verdict empties the token
/// store before returning false.
#[must_use]
pub fn is_authenticated() -> bool {
    match gate_for(token::token_status(auth_storage::token().as_deref(), token::now_secs())) {
        CredentialGate::Allow => true,
        CredentialGate::Deny => false,
        CredentialGate::DenyAndClear => {
            auth_storage::clear();
            false
        }
    }
}

/// Admin flag as last presented by the backend. No network call.
#[must_use]
pub fn is_admin() -> bool {
    admin_from_cache(auth_storage::profile().as_ref())
}

/// Premium flag from the cache. UI prefers the live-session variant on
/// [`SessionState`] when a profile is loaded.
#[must_use]
pub fn is_premium_cached() -> bool {
    premium_from_cache(auth_storage::profile().as_ref())
}

pub(crate) fn admin_from_cache(profile: Option<&Profile>) -> bool {
    profile.is_some_and(|p| p.is_admin)
}

pub(crate) fn premium_from_cache(profile: Option<&Profile>) -> bool {
    profile.is_some_and(|p| p.subscription_type == SubscriptionType::Premium)
}

/// Redirect rule for authenticated-only routes: only once the session has
/// settled, and only when nobody is logged in.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.profile.is_none()
}

/// Redirect rule for admin-only routes: settled and not an admin.
#[must_use]
pub fn should_redirect_non_admin(state: &SessionState) -> bool {
    !state.loading && !state.profile.as_ref().is_some_and(|p| p.is_admin)
}

/// Redirect to `/login` whenever the session settles without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever the session settles without an admin user.
pub fn install_admin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_admin(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
