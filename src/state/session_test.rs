use super::*;
use crate::net::types::SubscriptionType;

fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        subscription_type: SubscriptionType::Free,
        is_admin: false,
        completed_onboarding: false,
        travel_preferences: None,
    }
}

#[test]
fn default_state_is_initializing() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.profile.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn begin_op_raises_loading_and_clears_prior_error() {
    let mut state = SessionState { loading: false, error: Some("old".to_owned()), ..SessionState::default() };
    begin_op(&mut state);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn settle_anonymous_drops_profile_and_error() {
    let mut state = SessionState::default();
    settle_authenticated(&mut state, profile("u1"));
    state.error = Some("boom".to_owned());
    settle_anonymous(&mut state);
    assert!(!state.loading);
    assert!(state.profile.is_none());
    assert!(state.error.is_none());
    assert!(!state.onboarding_pending);
}

#[test]
fn settle_authenticated_adopts_profile_and_role_flags() {
    let mut state = SessionState::default();
    let mut p = profile("u1");
    p.is_admin = true;
    p.subscription_type = SubscriptionType::Premium;
    settle_authenticated(&mut state, p);
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert!(state.is_premium());
    assert!(!state.loading);
}

#[test]
fn settle_error_keeps_existing_profile() {
    let mut state = SessionState::default();
    settle_authenticated(&mut state, profile("u1"));
    begin_op(&mut state);
    settle_error(&mut state, "update failed".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.error.as_deref(), Some("update failed"));
    assert!(!state.loading);
}

#[test]
fn premium_registration_flags_onboarding_until_completed() {
    let mut state = SessionState::default();
    settle_premium_registered(&mut state, profile("u1"));
    assert!(state.onboarding_pending);

    // Adopting a profile that has completed onboarding clears the diversion.
    let mut done = profile("u1");
    done.completed_onboarding = true;
    settle_authenticated(&mut state, done);
    assert!(!state.onboarding_pending);
}

#[test]
fn premium_registration_with_completed_profile_skips_onboarding() {
    let mut state = SessionState::default();
    let mut p = profile("u2");
    p.completed_onboarding = true;
    settle_premium_registered(&mut state, p);
    assert!(!state.onboarding_pending);
}

#[test]
fn force_logout_resets_state_and_bumps_epoch() {
    let mut state = SessionState::default();
    settle_authenticated(&mut state, profile("u1"));
    let before = state.epoch;
    force_logout(&mut state);
    assert_eq!(state.epoch, before + 1);
    assert!(state.profile.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn stale_epoch_continuations_are_discarded() {
    let mut state = SessionState::default();
    let op_epoch = state.epoch;
    assert!(should_apply(&state, op_epoch));

    // A logout lands while the operation is in flight.
    force_logout(&mut state);
    assert!(!should_apply(&state, op_epoch));
    assert!(should_apply(&state, state.epoch));
}

#[test]
fn bootstrap_without_credential_settles_anonymous_offline() {
    // No stored credential means no revalidation request at all; the session
    // goes straight from initializing to a settled anonymous state.
    assert_eq!(bootstrap_plan(false), BootstrapPlan::SettleAnonymous);

    let mut state = SessionState::default();
    assert!(state.loading);
    settle_anonymous(&mut state);
    assert!(!state.loading);
    assert!(state.profile.is_none());
    assert!(state.error.is_none());
}

#[test]
fn bootstrap_with_credential_revalidates() {
    assert_eq!(bootstrap_plan(true), BootstrapPlan::Revalidate);
}

#[test]
fn login_error_message_distinguishes_transport_failures() {
    assert_eq!(
        login_error_message(&ApiError::Network),
        ApiError::Network.to_string()
    );
    assert_eq!(
        login_error_message(&ApiError::Message("email taken".to_owned())),
        "Incorrect email or password."
    );
    assert_eq!(
        login_error_message(&ApiError::Unauthorized),
        "Incorrect email or password."
    );
}
