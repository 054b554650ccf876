//! Form state holders. Each screen owns one of these for its lifetime and drops it
//! on teardown; nothing here is persisted. Passwords stay wrapped in
//! `SecretString` until the payload mapper exposes them for the request body.

use secrecy::SecretString;

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub identifier: String,
    pub secret: SecretString,
}

impl LoginForm {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub secret: SecretString,
    pub secret_confirm: SecretString,
    pub accepted_terms: bool,
}

impl RegistrationForm {
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = SecretString::from(secret.into());
        self
    }

    #[must_use]
    pub fn with_secret_confirm(mut self, secret: impl Into<String>) -> Self {
        self.secret_confirm = SecretString::from(secret.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn login_form_wraps_secret() {
        let form = LoginForm::new("V-12345678", "pw123");
        assert_eq!(form.identifier, "V-12345678");
        assert_eq!(form.secret.expose_secret(), "pw123");
        assert!(!format!("{form:?}").contains("pw123"));
    }

    #[test]
    fn registration_form_starts_empty() {
        let form = RegistrationForm::default();
        assert!(form.first_name.is_empty());
        assert_eq!(form.secret.expose_secret(), "");
        assert!(!form.accepted_terms);
    }

    #[test]
    fn registration_form_secret_builders() {
        let form = RegistrationForm::default()
            .with_secret("abc123")
            .with_secret_confirm("abc124");
        assert_eq!(form.secret.expose_secret(), "abc123");
        assert_eq!(form.secret_confirm.expose_secret(), "abc124");
    }
}
