use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Lifecycle of a credential form.
///
/// Validation runs synchronously inside the submit handler, so the
/// observable states are idle, waiting for the server, and waiting for
/// the post-success redirect.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting,
}

/// Validate email address format
///
/// Accepts exactly one `@` with a non-empty local part and a domain that
/// contains a dot with at least one character on each side. Whitespace
/// anywhere makes the address invalid.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // '.' is ASCII, so byte indices are safe here
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate login input, returning errors keyed by field name
pub fn validate_login(email: &str, password: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if !is_valid_email(email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    if password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }

    errors
}

/// Validate registration input, returning errors keyed by field name
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if !is_valid_email(email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            "password".to_string(),
            "Password must be at least 8 characters long".to_string(),
        );
    }

    if password != confirm_password {
        errors.insert(
            "confirmPassword".to_string(),
            "Passwords do not match".to_string(),
        );
    }

    errors
}
