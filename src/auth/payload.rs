//! Request bodies for the authentication API. The backend names its fields after
//! the Venezuelan ID card (`cedula`) and uses Spanish keys throughout; the serde
//! renames below are the only place that mapping lives.
//!
//! These bodies carry the plain password, so their `Debug` output is redacted and
//! they must never be logged.

use super::forms::{LoginForm, RegistrationForm};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::fmt;

const REDACTED: &str = "[REDACTED]";

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    #[serde(rename = "cedula")]
    pub identity: String,
    #[serde(rename = "contraseña")]
    pub secret: String,
}

impl fmt::Debug for LoginPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginPayload")
            .field("identity", &self.identity)
            .field("secret", &REDACTED)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "email")]
    pub contact_email: String,
    #[serde(rename = "contraseña")]
    pub secret: String,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistrationPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("national_id", &self.national_id)
            .field("phone", &self.phone)
            .field("contact_email", &self.contact_email)
            .field("secret", &REDACTED)
            .finish()
    }
}

#[must_use]
pub fn to_login_payload(form: &LoginForm) -> LoginPayload {
    LoginPayload {
        identity: form.identifier.clone(),
        secret: form.secret.expose_secret().to_string(),
    }
}

/// The confirmation field is not part of the request.
#[must_use]
pub fn to_registration_payload(form: &RegistrationForm) -> RegistrationPayload {
    RegistrationPayload {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        national_id: form.national_id.clone(),
        phone: form.phone.clone(),
        contact_email: form.email.clone(),
        secret: form.secret.expose_secret().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    fn registration() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            national_id: "V-12345678".to_string(),
            phone: "0414-5551234".to_string(),
            email: "ana@example.com".to_string(),
            accepted_terms: true,
            ..RegistrationForm::default()
        }
        .with_secret("abc123")
        .with_secret_confirm("abc123")
    }

    #[test]
    fn login_payload_uses_backend_names() -> serde_json::Result<()> {
        let payload = to_login_payload(&LoginForm::new("V-12345678", "pw123"));
        assert_eq!(
            to_value(&payload)?,
            json!({"cedula": "V-12345678", "contraseña": "pw123"})
        );
        Ok(())
    }

    #[test]
    fn registration_payload_uses_backend_names() -> serde_json::Result<()> {
        let payload = to_registration_payload(&registration());
        assert_eq!(
            to_value(&payload)?,
            json!({
                "nombre": "Ana",
                "apellido": "Pérez",
                "cedula": "V-12345678",
                "telefono": "0414-5551234",
                "email": "ana@example.com",
                "contraseña": "abc123",
            })
        );
        Ok(())
    }

    #[test]
    fn mapping_is_idempotent() {
        let login = LoginForm::new(" V-1 ", "pw");
        assert_eq!(to_login_payload(&login), to_login_payload(&login));

        let form = registration();
        assert_eq!(to_registration_payload(&form), to_registration_payload(&form));
    }

    #[test]
    fn values_pass_through_untrimmed() {
        let payload = to_login_payload(&LoginForm::new(" V-1 ", " pw "));
        assert_eq!(payload.identity, " V-1 ");
        assert_eq!(payload.secret, " pw ");
    }

    #[test]
    fn debug_output_hides_password() {
        let login = format!("{:?}", to_login_payload(&LoginForm::new("V-1", "pw123")));
        assert!(!login.contains("pw123"));
        assert!(login.contains(REDACTED));

        let registration = format!("{:?}", to_registration_payload(&registration()));
        assert!(!registration.contains("abc123"));
        assert!(registration.contains("ana@example.com"));
    }
}
