use super::*;

fn profile(is_admin: bool, tier: SubscriptionType) -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "u1@example.com".to_owned(),
        name: "U1".to_owned(),
        subscription_type: tier,
        is_admin,
        completed_onboarding: true,
        travel_preferences: None,
    }
}

#[test]
fn valid_credential_is_allowed_through_the_gate() {
    assert_eq!(gate_for(TokenStatus::Valid), CredentialGate::Allow);
}

#[test]
fn missing_credential_is_denied_without_touching_the_store() {
    assert_eq!(gate_for(TokenStatus::Missing), CredentialGate::Deny);
}

#[test]
fn invalid_credential_demands_a_store_clear() {
    // Expired and undecodable tokens alike must empty the store, not just
    // answer false.
    assert_eq!(gate_for(TokenStatus::Invalid), CredentialGate::DenyAndClear);
}

#[test]
fn admin_from_cache_requires_a_profile_with_the_flag() {
    assert!(!admin_from_cache(None));
    assert!(!admin_from_cache(Some(&profile(false, SubscriptionType::Free))));
    assert!(admin_from_cache(Some(&profile(true, SubscriptionType::Free))));
}

#[test]
fn premium_from_cache_checks_subscription_type() {
    assert!(!premium_from_cache(None));
    assert!(!premium_from_cache(Some(&profile(false, SubscriptionType::Free))));
    assert!(premium_from_cache(Some(&profile(false, SubscriptionType::Premium))));
}

#[test]
fn no_redirect_while_session_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}

#[test]
fn settled_anonymous_session_redirects() {
    let state = SessionState { loading: false, ..SessionState::default() };
    assert!(should_redirect_unauth(&state));
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn settled_authenticated_session_passes_auth_guard() {
    let state = SessionState {
        loading: false,
        profile: Some(profile(false, SubscriptionType::Free)),
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
    // But not the admin guard.
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn admin_session_passes_both_guards() {
    let state = SessionState {
        loading: false,
        profile: Some(profile(true, SubscriptionType::Premium)),
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}
