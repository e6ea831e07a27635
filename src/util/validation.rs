//! Field validation rules shared by the auth and resource forms.
//!
//! Every rule returns `Result<_, &'static str>` with a message ready for
//! the inline error line under the field. Pages compose these into
//! per-screen validators so individual screens stay declarative.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Require a non-blank value; returns it trimmed.
pub fn require(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field is required");
    }
    Ok(trimmed.to_owned())
}

/// Basic `local@domain.tld` shape check; returns the trimmed address.
pub fn valid_email(value: &str) -> Result<String, &'static str> {
    const MESSAGE: &str = "Enter a valid email address";
    let trimmed = value.trim();
    if trimmed.contains(char::is_whitespace) {
        return Err(MESSAGE);
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty() || domain.is_empty() {
        return Err(MESSAGE);
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(MESSAGE);
    };
    if host.is_empty() || tld.is_empty() {
        return Err(MESSAGE);
    }
    Ok(trimmed.to_owned())
}

/// Passwords must be at least six characters. Not trimmed: leading or
/// trailing spaces are part of the password.
pub fn valid_password(value: &str) -> Result<String, &'static str> {
    if value.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(value.to_owned())
}

/// Confirm-password check.
pub fn passwords_match(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm {
        Ok(())
    } else {
        Err("Passwords do not match")
    }
}

/// One-time codes are exactly six ASCII digits.
pub fn valid_otp(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.len() == 6 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed.to_owned())
    } else {
        Err("OTP must be exactly 6 digits")
    }
}

/// Keep only digits while the user types a one-time code, capped at six.
pub fn normalize_otp_input(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(6).collect()
}

/// Split comma-separated input into trimmed, non-empty entries.
///
/// Tag and stack fields are typed as one line; blanks between commas are
/// dropped rather than kept as empty entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}
