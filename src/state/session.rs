//! Live session state and its mutating operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<SessionState>`; route guards,
//! the nav bar, and every auth page read it. All session mutations funnel
//! through the operations here so consumers never observe a torn state.
//!
//! DESIGN
//! ======
//! Every async operation captures the session epoch before its await point
//! and discards its continuation when the epoch has moved, so a logout (user
//! or 401-driven) can never be clobbered by a slower in-flight response.
//! The reducers are plain functions over `SessionState` and carry the unit
//! tests; the async wrappers only sequence storage, network, and reducer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{
    Profile, ProfileUpdate, RegisterBasicRequest, RegisterPremiumRequest,
};
use crate::util::auth_storage;

/// The session as observed by consumers.
///
/// `loading=true, profile=None` is the initializing state entered at app
/// start; operations overlay a transient busy state by setting `loading`
/// around their single backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every logout; stale continuations compare against it.
    pub epoch: u64,
    /// Set by premium registration until the onboarding wizard completes.
    pub onboarding_pending: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
            error: None,
            epoch: 0,
            onboarding_pending: false,
        }
    }
}

impl SessionState {
    /// A profile is loaded and the session has settled.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Admin flag from the live profile (never from cache).
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_admin)
    }

    /// Premium flag from the live profile; preferred by UI over the cached
    /// oracle variant.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.profile.as_ref().is_some_and(Profile::is_premium)
    }
}

// --- reducers ---------------------------------------------------------------

/// Enter the busy overlay: raise `loading`, drop any prior error.
pub fn begin_op(state: &mut SessionState) {
    state.loading = true;
    state.error = None;
}

/// Settle with no user and no error.
pub fn settle_anonymous(state: &mut SessionState) {
    state.profile = None;
    state.loading = false;
    state.error = None;
    state.onboarding_pending = false;
}

/// Adopt a server-issued profile as the live session.
pub fn settle_authenticated(state: &mut SessionState, profile: Profile) {
    if profile.completed_onboarding {
        state.onboarding_pending = false;
    }
    state.profile = Some(profile);
    state.loading = false;
    state.error = None;
}

/// Adopt a freshly premium-registered profile and flag the one-time
/// onboarding diversion.
pub fn settle_premium_registered(state: &mut SessionState, profile: Profile) {
    state.onboarding_pending = !profile.completed_onboarding;
    state.profile = Some(profile);
    state.loading = false;
    state.error = None;
}

/// Settle the busy overlay with an error, leaving the profile untouched.
pub fn settle_error(state: &mut SessionState, message: String) {
    state.loading = false;
    state.error = Some(message);
}

/// Settle the busy overlay with neither a state change nor an error.
pub fn settle_noop(state: &mut SessionState) {
    state.loading = false;
}

/// Reset to anonymous and invalidate all in-flight continuations.
pub fn force_logout(state: &mut SessionState) {
    state.epoch += 1;
    settle_anonymous(state);
}

/// Whether a continuation started at `op_epoch` may still apply its result.
#[must_use]
pub fn should_apply(state: &SessionState, op_epoch: u64) -> bool {
    state.epoch == op_epoch
}

/// Message shown when a login attempt fails. Transport failures keep the
/// connectivity wording; everything else reads as bad credentials.
#[must_use]
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network => error.to_string(),
        _ => "Incorrect email or password.".to_owned(),
    }
}

/// What the bootstrap does before touching the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapPlan {
    /// No plausible stored credential: settle anonymous, issue no request.
    SettleAnonymous,
    /// A credential is present: revalidate it against the backend.
    Revalidate,
}

#[must_use]
pub fn bootstrap_plan(credential_present: bool) -> BootstrapPlan {
    if credential_present {
        BootstrapPlan::Revalidate
    } else {
        BootstrapPlan::SettleAnonymous
    }
}

// --- operations -------------------------------------------------------------

/// One-shot session bootstrap, run once per application load.
///
/// Without a valid stored credential this settles anonymous with no network
/// call. Otherwise the profile is revalidated against `/api/auth/me`; any
/// failure clears the store so a stale cache is never trusted.
pub async fn init(session: RwSignal<SessionState>) {
    if bootstrap_plan(crate::util::auth::is_authenticated()) == BootstrapPlan::SettleAnonymous {
        session.update(settle_anonymous);
        return;
    }
    let epoch = session.with_untracked(|s| s.epoch);
    match api::fetch_current_profile().await {
        Ok(profile) => {
            if session.with_untracked(|s| should_apply(s, epoch)) {
                auth_storage::update_profile_cache(&profile);
                session.update(|s| settle_authenticated(s, profile));
            }
        }
        Err(_) => {
            #[cfg(feature = "hydrate")]
            log::warn!("stored session failed revalidation; signing out");
            auth_storage::clear();
            if session.with_untracked(|s| should_apply(s, epoch)) {
                session.update(settle_anonymous);
            }
        }
    }
}

/// Authenticate with email/password. Returns true on success.
pub async fn login(session: RwSignal<SessionState>, email: String, password: String) -> bool {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::login(&email, &password).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return false;
    }
    match result {
        Ok(resp) => {
            auth_storage::set_auth(&resp.token, &resp.user);
            session.update(|s| settle_authenticated(s, resp.user));
            true
        }
        Err(err) => {
            session.update(|s| settle_error(s, login_error_message(&err)));
            false
        }
    }
}

/// Free-tier signup. Does not establish a session; the account needs email
/// activation first. Returns the backend confirmation message on success.
pub async fn register_basic(
    session: RwSignal<SessionState>,
    request: RegisterBasicRequest,
) -> Option<String> {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::register_basic(&request).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return None;
    }
    match result {
        Ok(resp) => {
            session.update(settle_noop);
            Some(resp.message)
        }
        Err(err) => {
            session.update(|s| settle_error(s, err.to_string()));
            None
        }
    }
}

/// Premium signup. Establishes a session immediately and flags the one-time
/// onboarding diversion. Returns true on success.
pub async fn register_premium(
    session: RwSignal<SessionState>,
    request: RegisterPremiumRequest,
) -> bool {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::register_premium(&request).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return false;
    }
    match result {
        Ok(resp) => {
            auth_storage::set_auth(&resp.token, &resp.user);
            session.update(|s| settle_premium_registered(s, resp.user));
            true
        }
        Err(err) => {
            session.update(|s| settle_error(s, err.to_string()));
            false
        }
    }
}

/// Synchronous logout: no backend call, unconditional.
pub fn logout(session: RwSignal<SessionState>) {
    auth_storage::clear();
    session.update(force_logout);
}

/// Ask the backend to email a reset link. No session side effects.
pub async fn request_password_reset(
    session: RwSignal<SessionState>,
    email: String,
) -> Option<String> {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::request_password_reset(&email).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return None;
    }
    match result {
        Ok(resp) => {
            session.update(settle_noop);
            Some(resp.message)
        }
        Err(err) => {
            session.update(|s| settle_error(s, err.to_string()));
            None
        }
    }
}

/// Consume a reset token from the emailed link. No session side effects.
pub async fn reset_password(
    session: RwSignal<SessionState>,
    token: String,
    new_password: String,
) -> Option<String> {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::reset_password(&token, &new_password).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return None;
    }
    match result {
        Ok(resp) => {
            session.update(settle_noop);
            Some(resp.message)
        }
        Err(err) => {
            session.update(|s| settle_error(s, err.to_string()));
            None
        }
    }
}

/// Send a partial profile update. A response carrying a profile replaces both
/// the live state and the cache, reusing the still-valid credential; a
/// response without one leaves the session untouched.
pub async fn update_profile(session: RwSignal<SessionState>, update: ProfileUpdate) -> bool {
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(begin_op);
    let result = api::update_profile(&update).await;
    if !session.with_untracked(|s| should_apply(s, epoch)) {
        return false;
    }
    match result {
        Ok(resp) => {
            if let Some(profile) = resp.user {
                auth_storage::update_profile_cache(&profile);
                session.update(|s| settle_authenticated(s, profile));
            } else {
                session.update(settle_noop);
            }
            true
        }
        Err(err) => {
            session.update(|s| settle_error(s, err.to_string()));
            false
        }
    }
}
