use super::*;

#[test]
fn validate_registration_input_accepts_good_input() {
    let input = validate_registration_input(" Ada ", " ada@example.com ", "longenough", "longenough");
    assert_eq!(
        input,
        Ok(RegistrationInput {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "longenough".to_owned(),
        })
    );
}

#[test]
fn validate_registration_input_requires_all_fields() {
    assert_eq!(
        validate_registration_input("", "a@b.com", "longenough", "longenough"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        validate_registration_input("Ada", "", "longenough", "longenough"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        validate_registration_input("Ada", "a@b.com", "", ""),
        Err("Fill in all fields.")
    );
}

#[test]
fn validate_registration_input_rejects_bad_email() {
    assert_eq!(
        validate_registration_input("Ada", "nope", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_input_enforces_password_length() {
    assert_eq!(
        validate_registration_input("Ada", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_registration_input_requires_matching_confirmation() {
    assert_eq!(
        validate_registration_input("Ada", "a@b.com", "longenough", "different"),
        Err("Passwords do not match.")
    );
}
