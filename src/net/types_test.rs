use super::*;

#[test]
fn profile_deserializes_camel_case_with_defaults() {
    let json = r#"{
        "id": "u1",
        "email": "ada@example.com",
        "name": "Ada",
        "subscriptionType": "premium",
        "isAdmin": true
    }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.subscription_type, SubscriptionType::Premium);
    assert!(profile.is_admin);
    assert!(!profile.completed_onboarding);
    assert!(profile.travel_preferences.is_none());
    assert!(profile.is_premium());
}

#[test]
fn profile_missing_subscription_defaults_to_free() {
    let json = r#"{ "id": "u2", "email": "b@example.com", "name": "B" }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.subscription_type, SubscriptionType::Free);
    assert!(!profile.is_premium());
    assert!(!profile.is_admin);
}

#[test]
fn profile_unknown_subscription_is_rejected() {
    let json = r#"{ "id": "u3", "email": "c@example.com", "name": "C", "subscriptionType": "platinum" }"#;
    assert!(serde_json::from_str::<Profile>(json).is_err());
}

#[test]
fn profile_round_trips_through_cache_serialization() {
    let profile = Profile {
        id: "u4".to_owned(),
        email: "d@example.com".to_owned(),
        name: "D".to_owned(),
        subscription_type: SubscriptionType::Premium,
        is_admin: false,
        completed_onboarding: true,
        travel_preferences: Some(TravelPreferences {
            home_airports: vec!["LHR".to_owned()],
            favorite_destinations: vec!["JFK".to_owned()],
            flexible_dates: true,
        }),
    };
    let raw = serde_json::to_string(&profile).unwrap();
    let back: Profile = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn auth_response_carries_token_and_user() {
    let json = r#"{ "token": "abc.def.ghi", "user": { "id": "u5", "email": "e@example.com", "name": "E" } }"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "abc.def.ghi");
    assert_eq!(resp.user.id, "u5");
}

#[test]
fn profile_update_serializes_only_present_fields() {
    let update = ProfileUpdate {
        name: Some("New Name".to_owned()),
        ..ProfileUpdate::default()
    };
    let raw = serde_json::to_string(&update).unwrap();
    assert_eq!(raw, r#"{"name":"New Name"}"#);
}

#[test]
fn profile_response_tolerates_missing_user() {
    let resp: ProfileResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.user.is_none());
}

#[test]
fn discount_percent_requires_known_higher_previous_price() {
    let mut alert = FlightAlert {
        id: "a1".to_owned(),
        origin: "LHR".to_owned(),
        destination: "JFK".to_owned(),
        price: 150.0,
        currency: "EUR".to_owned(),
        previous_price: Some(300.0),
        departure_date: "2026-10-01".to_owned(),
        return_date: None,
        detected_at: "2026-08-30T10:00:00Z".to_owned(),
        deal_url: None,
        premium: false,
    };
    assert_eq!(alert.discount_percent(), Some(50));

    alert.previous_price = None;
    assert_eq!(alert.discount_percent(), None);

    alert.previous_price = Some(100.0);
    assert_eq!(alert.discount_percent(), None);
}

#[test]
fn route_label_joins_origin_and_destination() {
    let alert = FlightAlert {
        id: "a2".to_owned(),
        origin: "CDG".to_owned(),
        destination: "NRT".to_owned(),
        price: 400.0,
        currency: "EUR".to_owned(),
        previous_price: None,
        departure_date: "2026-11-05".to_owned(),
        return_date: None,
        detected_at: "2026-08-30T10:00:00Z".to_owned(),
        deal_url: None,
        premium: true,
    };
    assert_eq!(alert.route_label(), "CDG - NRT");
}

#[test]
fn usage_percent_clamps_and_handles_zero_quota() {
    let mut stats = ApiUsageStats { total_calls: 250, quota: 1000, endpoints: vec![] };
    assert_eq!(stats.usage_percent(), 25);

    stats.total_calls = 2000;
    assert_eq!(stats.usage_percent(), 100);

    stats.quota = 0;
    assert_eq!(stats.usage_percent(), 0);
}
