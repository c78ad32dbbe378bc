use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Email and password as entered on the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages. A `None` field passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.email.as_deref(), self.password.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        f.write_str(&messages.join(" "))
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required.".to_string());
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Some("Invalid email format.".to_string());
    }
    None
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    None
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Runs both field validators; both messages are reported at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            email: validate_email(&self.email),
            password: validate_password(&self.password),
        };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert_eq!(validate_email(""), Some("Email is required.".to_string()));
        assert_eq!(
            validate_email("not-an-email"),
            Some("Invalid email format.".to_string())
        );
        assert_eq!(
            validate_email("a@b"),
            Some("Invalid email format.".to_string())
        );
        assert_eq!(validate_email("test@example.com"), None);
    }

    #[test]
    fn test_password_validation() {
        assert_eq!(
            validate_password(""),
            Some("Password is required.".to_string())
        );
        assert_eq!(
            validate_password("12345"),
            Some("Password must be at least 6 characters.".to_string())
        );
        assert_eq!(validate_password("123456"), None);
    }

    #[test]
    fn test_credentials_collect_both_errors() {
        let errors = Credentials::new("", "abc").validate().unwrap_err();
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert_eq!(
            errors.to_string(),
            "Email is required. Password must be at least 6 characters."
        );

        assert!(
            Credentials::new("test@example.com", "password123")
                .validate()
                .is_ok()
        );
    }
}
