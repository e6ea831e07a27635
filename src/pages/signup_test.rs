use super::*;

fn valid_input() -> SignupErrors {
    validate_signup(
        "Ada",
        "Lovelace",
        "ada@example.com",
        "Female",
        "investigator",
        "hunter42",
        "hunter42",
    )
}

#[test]
fn complete_input_passes() {
    assert!(valid_input().is_clean());
}

#[test]
fn blank_names_are_flagged() {
    let errors = validate_signup(
        "  ",
        "",
        "ada@example.com",
        "Female",
        "investigator",
        "hunter42",
        "hunter42",
    );
    assert_eq!(errors.firstname, Some("This field is required"));
    assert_eq!(errors.lastname, Some("This field is required"));
    assert!(errors.email.is_none());
}

#[test]
fn bad_email_and_short_password_are_flagged() {
    let errors = validate_signup(
        "Ada",
        "Lovelace",
        "not-an-email",
        "Male",
        "user",
        "abc",
        "abc",
    );
    assert_eq!(errors.email, Some("Enter a valid email address"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn mismatched_confirmation_is_flagged() {
    let errors = validate_signup(
        "Ada",
        "Lovelace",
        "ada@example.com",
        "Female",
        "admin",
        "hunter42",
        "hunter43",
    );
    assert_eq!(errors.confirm, Some("Passwords do not match"));
    assert!(errors.password.is_none());
}

#[test]
fn unselected_dropdowns_are_flagged() {
    let errors =
        validate_signup("Ada", "Lovelace", "ada@example.com", "", "", "hunter42", "hunter42");
    assert_eq!(errors.gender, Some("This field is required"));
    assert_eq!(errors.user_type, Some("This field is required"));
}
