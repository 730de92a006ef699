//! Login form validation.
//!
//! The form enforces the same rules on blur and on submit: a well-formed
//! email address and a password of at least six characters. Each check
//! returns the per-field error message to display, or `None` if the
//! field is acceptable.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate the email field, returning the message to show under it.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

/// Validate the password field, returning the message to show under it.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.len() < MIN_PASSWORD_LENGTH {
        Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))
    } else {
        None
    }
}

/// Minimal well-formedness check: one `@` with a non-empty local part and
/// a dotted domain. Not a full RFC 5322 parse; nothing downstream needs one.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs an interior dot: "b.com" yes, ".com" and "com." no
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_passes() {
        assert_eq!(validate_email("a@b.com"), None);
        assert_eq!(validate_email("user.name@mail.example.org"), None);
    }

    #[test]
    fn test_empty_email_is_required() {
        assert_eq!(validate_email(""), Some("Email is required".to_string()));
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in [
            "not-an-email",
            "@b.com",
            "a@com",
            "a@.com",
            "a@b.",
            "a@b@c.com",
            "a b@c.com",
        ] {
            assert_eq!(
                validate_email(bad),
                Some("Invalid email address".to_string()),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_valid_password_passes() {
        assert_eq!(validate_password("secret1"), None);
        assert_eq!(validate_password("123456"), None);
    }

    #[test]
    fn test_empty_password_is_required() {
        assert_eq!(
            validate_password(""),
            Some("Password is required".to_string())
        );
    }

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(
            validate_password("ab"),
            Some("Password must be at least 6 characters".to_string())
        );
        assert_eq!(
            validate_password("12345"),
            Some("Password must be at least 6 characters".to_string())
        );
    }
}
