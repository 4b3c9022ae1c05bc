use super::*;

#[test]
fn validate_reset_input_accepts_token_and_matching_passwords() {
    assert_eq!(
        validate_reset_input(Some(" tok123 "), "longenough", "longenough"),
        Ok(("tok123".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_reset_input_requires_a_token() {
    let expected = Err("This reset link is missing its token. Request a new one.");
    assert_eq!(validate_reset_input(None, "longenough", "longenough"), expected);
    assert_eq!(validate_reset_input(Some("   "), "longenough", "longenough"), expected);
}

#[test]
fn validate_reset_input_enforces_password_rules() {
    assert_eq!(
        validate_reset_input(Some("tok"), "short", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_reset_input(Some("tok"), "longenough", "different"),
        Err("Passwords do not match.")
    );
}
