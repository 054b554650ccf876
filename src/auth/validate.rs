//! Local checks run before any request is built. Both functions are pure over the
//! form snapshot they receive.

use super::{
    errors::{Field, ValidationError},
    forms::{LoginForm, RegistrationForm},
};
use secrecy::ExposeSecret;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// # Errors
/// Returns `MissingField` for the first blank field, identifier before secret.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if is_blank(&form.identifier) {
        return Err(ValidationError::MissingField {
            field: Field::Identifier,
        });
    }
    if is_blank(form.secret.expose_secret()) {
        return Err(ValidationError::MissingField {
            field: Field::Secret,
        });
    }
    Ok(())
}

/// Checks terms, then password confirmation, then required fields.
///
/// The confirmation field only takes part in the equality check.
///
/// # Errors
/// Returns the first failing check in the order above.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if !form.accepted_terms {
        return Err(ValidationError::TermsNotAccepted);
    }

    if form.secret.expose_secret() != form.secret_confirm.expose_secret() {
        return Err(ValidationError::PasswordMismatch);
    }

    let required = [
        (Field::FirstName, form.first_name.as_str()),
        (Field::LastName, form.last_name.as_str()),
        (Field::NationalId, form.national_id.as_str()),
        (Field::Phone, form.phone.as_str()),
        (Field::Email, form.email.as_str()),
        (Field::Secret, form.secret.expose_secret()),
    ];

    match required.iter().find(|(_, value)| is_blank(value)) {
        Some((field, _)) => Err(ValidationError::MissingField { field: *field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_registration() -> RegistrationForm {
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
    fn login_accepts_filled_form() {
        assert_eq!(validate_login(&LoginForm::new("V-12345678", "pw123")), Ok(()));
    }

    #[test]
    fn login_rejects_blank_fields() {
        let cases = [
            (LoginForm::new("", "pw123"), Field::Identifier),
            (LoginForm::new("   ", "pw123"), Field::Identifier),
            (LoginForm::new("V-1", ""), Field::Secret),
            (LoginForm::new("V-1", " \t"), Field::Secret),
            (LoginForm::new("", ""), Field::Identifier),
        ];
        for (form, field) in cases {
            assert_eq!(
                validate_login(&form),
                Err(ValidationError::MissingField { field })
            );
        }
    }

    #[test]
    fn registration_accepts_complete_form() {
        assert_eq!(validate_registration(&complete_registration()), Ok(()));
    }

    #[test]
    fn registration_terms_checked_first() {
        // Everything else is wrong too; terms still win.
        let form = RegistrationForm::default()
            .with_secret("a")
            .with_secret_confirm("b");
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::TermsNotAccepted)
        );

        let form = RegistrationForm {
            accepted_terms: false,
            ..complete_registration()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::TermsNotAccepted)
        );
    }

    #[test]
    fn registration_mismatch_before_missing_fields() {
        let form = RegistrationForm {
            first_name: String::new(),
            ..complete_registration()
        }
        .with_secret("abc123")
        .with_secret_confirm("abc124");
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn registration_reports_first_missing_field() {
        let form = RegistrationForm {
            phone: String::new(),
            email: String::new(),
            ..complete_registration()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingField {
                field: Field::Phone
            })
        );
    }

    #[test]
    fn registration_blank_password_pair_is_missing_secret() {
        let form = complete_registration()
            .with_secret("")
            .with_secret_confirm("");
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingField {
                field: Field::Secret
            })
        );
    }
}
