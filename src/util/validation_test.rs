use super::*;

#[test]
fn require_trims_and_rejects_blank() {
    assert_eq!(require("  Ada  "), Ok("Ada".to_owned()));
    assert_eq!(require("   "), Err("This field is required"));
    assert_eq!(require(""), Err("This field is required"));
}

#[test]
fn valid_email_accepts_plain_addresses() {
    assert_eq!(valid_email(" ada@example.com "), Ok("ada@example.com".to_owned()));
    assert_eq!(valid_email("a.b@mail.co.uk"), Ok("a.b@mail.co.uk".to_owned()));
}

#[test]
fn valid_email_rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "ada@", "ada@nodot", "ada@.com", "ada@com.", "a da@example.com"] {
        assert_eq!(valid_email(bad), Err("Enter a valid email address"), "case: {bad:?}");
    }
}

#[test]
fn valid_password_enforces_minimum_length() {
    assert_eq!(valid_password("12345"), Err("Password must be at least 6 characters"));
    assert_eq!(valid_password("123456"), Ok("123456".to_owned()));
    // Counted in characters, not bytes.
    assert_eq!(valid_password("pässwö"), Ok("pässwö".to_owned()));
}

#[test]
fn valid_password_keeps_surrounding_spaces() {
    assert_eq!(valid_password("  ab  "), Ok("  ab  ".to_owned()));
}

#[test]
fn passwords_match_compares_exactly() {
    assert_eq!(passwords_match("secret1", "secret1"), Ok(()));
    assert_eq!(passwords_match("secret1", "Secret1"), Err("Passwords do not match"));
}

#[test]
fn valid_otp_requires_six_digits() {
    assert_eq!(valid_otp(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(valid_otp("12345"), Err("OTP must be exactly 6 digits"));
    assert_eq!(valid_otp("1234567"), Err("OTP must be exactly 6 digits"));
    assert_eq!(valid_otp("12a456"), Err("OTP must be exactly 6 digits"));
    assert_eq!(valid_otp(""), Err("OTP must be exactly 6 digits"));
}

#[test]
fn normalize_otp_input_strips_non_digits_and_caps_length() {
    assert_eq!(normalize_otp_input("12-34 56"), "123456");
    assert_eq!(normalize_otp_input("abc"), "");
    assert_eq!(normalize_otp_input("123456789"), "123456");
}

#[test]
fn parse_list_splits_and_trims() {
    assert_eq!(
        parse_list("rust, wasm ,leptos"),
        vec!["rust".to_owned(), "wasm".to_owned(), "leptos".to_owned()],
    );
}

#[test]
fn parse_list_drops_empty_entries() {
    assert_eq!(parse_list(" , ,fire,"), vec!["fire".to_owned()]);
    assert!(parse_list("").is_empty());
    assert!(parse_list("  ,  ").is_empty());
}
