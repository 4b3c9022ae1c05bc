use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build an unsigned JWT-shaped string with the given payload JSON.
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}

fn token_with_exp(exp: u64) -> String {
    token_with_payload(&format!(r#"{{"sub":"u1","iat":1000,"exp":{exp}}}"#))
}

#[test]
fn decode_claims_reads_subject_expiry_and_admin_flag() {
    let token = token_with_payload(r#"{"sub":"u42","iat":5,"exp":99,"isAdmin":true}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, "u42");
    assert_eq!(claims.iat, 5);
    assert_eq!(claims.exp, 99);
    assert!(claims.is_admin);
}

#[test]
fn decode_claims_defaults_admin_to_false() {
    let claims = decode_claims(&token_with_exp(99)).unwrap();
    assert!(!claims.is_admin);
}

#[test]
fn decode_claims_rejects_garbage() {
    assert!(decode_claims("not a token").is_none());
    assert!(decode_claims("only.two").is_none());
    assert!(decode_claims("a.!!!notbase64!!!.c").is_none());
    let bad_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"{\"sub\":"));
    assert!(decode_claims(&bad_json).is_none());
}

#[test]
fn token_status_missing_when_absent() {
    assert_eq!(token_status(None, 0), TokenStatus::Missing);
}

#[test]
fn token_status_valid_strictly_before_expiry() {
    let token = token_with_exp(2000);
    assert_eq!(token_status(Some(&token), 1999), TokenStatus::Valid);
    assert_eq!(token_status(Some(&token), 2000), TokenStatus::Invalid);
    assert_eq!(token_status(Some(&token), 2001), TokenStatus::Invalid);
}

#[test]
fn token_status_invalid_when_undecodable() {
    assert_eq!(token_status(Some("garbage"), 0), TokenStatus::Invalid);
}

#[test]
fn is_expired_uses_wall_clock() {
    // Far-future expiry stays valid; epoch-era expiry does not.
    assert!(!is_expired(&token_with_exp(u64::MAX)));
    assert!(is_expired(&token_with_exp(1)));
    assert!(is_expired("garbage"));
}
