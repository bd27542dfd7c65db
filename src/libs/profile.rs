use crate::libs::messages::{append_error, Message};
use serde::{Deserialize, Serialize};

/// A planner profile. `password` holds the SHA-256 hex digest, never the
/// plaintext. At most one profile is selected at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<i64>,
    pub username: String,
    pub password: Option<String>,
    pub is_selected: bool,
}

impl Profile {
    pub fn new(username: &str, password_digest: Option<String>) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            password: password_digest,
            is_selected: false,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }
}

/// Validates input for a new profile, collecting every violated rule.
///
/// `username_taken` is the caller's store pre-check; the UNIQUE constraint
/// on the username column remains authoritative at insert time.
pub fn validate_new_profile(username: &str, password: Option<&str>, username_taken: bool) -> Result<(), String> {
    let mut errors = String::new();

    if username.is_empty() {
        append_error(&mut errors, Message::UsernameRequired);
    }
    if username.chars().count() > 30 {
        append_error(&mut errors, Message::UsernameTooLong);
    }
    if username_taken {
        append_error(&mut errors, Message::UsernameTaken);
    }
    if let Some(password) = password {
        if password.chars().count() > 50 {
            append_error(&mut errors, Message::PasswordTooLong);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_profile() {
        assert!(validate_new_profile("ada", None, false).is_ok());
    }

    #[test]
    fn rejects_empty_username() {
        let err = validate_new_profile("", None, false).unwrap_err();
        assert!(err.contains("Please Enter a Username"));
    }

    #[test]
    fn rejects_taken_username() {
        let err = validate_new_profile("ada", None, true).unwrap_err();
        assert!(err.contains("Username is Taken"));
    }

    #[test]
    fn collects_all_violations() {
        let long_name = "x".repeat(31);
        let long_password = "y".repeat(51);
        let err = validate_new_profile(&long_name, Some(&long_password), true).unwrap_err();
        assert!(err.contains("Username Shouldn't Be Longer Than 30 Characters"));
        assert!(err.contains("Username is Taken, Please Try Another"));
        assert!(err.contains("Password Shouldn't Be Longer Than 50 Characters"));
        assert_eq!(err.matches("\n\n").count(), 2);
    }
}
