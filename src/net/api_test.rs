use super::*;

#[test]
fn admin_user_endpoint_formats_expected_path() {
    assert_eq!(admin_user_endpoint("u123"), "/api/admin/users/u123");
}

#[test]
fn admin_route_tier_endpoint_formats_expected_path() {
    assert_eq!(admin_route_tier_endpoint("r9"), "/api/admin/routes/r9/tier");
}

#[test]
fn auth_endpoints_are_exempt_from_the_401_interceptor() {
    assert!(is_auth_exempt("/api/auth/login"));
    assert!(is_auth_exempt("/api/auth/register"));
    assert!(is_auth_exempt("/api/auth/register-premium"));
    assert!(is_auth_exempt("/api/auth/forgot-password"));
    assert!(is_auth_exempt("/api/auth/reset-password"));
}

#[test]
fn session_endpoints_are_not_exempt() {
    assert!(!is_auth_exempt("/api/auth/me"));
    assert!(!is_auth_exempt("/api/alerts"));
    assert!(!is_auth_exempt("/api/users/me"));
    assert!(!is_auth_exempt("/api/admin/stats"));
}

#[test]
fn extract_error_message_reads_message_field() {
    assert_eq!(
        extract_error_message(r#"{"message":"Email already registered."}"#),
        Some("Email already registered.".to_owned())
    );
}

#[test]
fn extract_error_message_ignores_blank_or_missing_messages() {
    assert_eq!(extract_error_message(r#"{"message":"   "}"#), None);
    assert_eq!(extract_error_message(r#"{"error":"nope"}"#), None);
    assert_eq!(extract_error_message("not json"), None);
    assert_eq!(extract_error_message(""), None);
}

#[test]
fn error_for_status_maps_401_to_unauthorized() {
    assert_eq!(error_for_status(401, r#"{"message":"whatever"}"#), ApiError::Unauthorized);
}

#[test]
fn error_for_status_surfaces_backend_message_verbatim() {
    assert_eq!(
        error_for_status(422, r#"{"message":"Password too short."}"#),
        ApiError::Message("Password too short.".to_owned())
    );
}

#[test]
fn error_for_status_falls_back_to_generic_text() {
    assert_eq!(
        error_for_status(500, "<html>oops</html>"),
        ApiError::Message("The request failed (status 500).".to_owned())
    );
}

#[test]
fn should_force_login_skips_when_already_on_login() {
    assert!(should_force_login("/dashboard"));
    assert!(should_force_login("/"));
    assert!(!should_force_login("/login"));
}
