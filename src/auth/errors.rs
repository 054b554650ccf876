use std::fmt;
use thiserror::Error;

/// Form fields that can be reported as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Identifier,
    Secret,
    FirstName,
    LastName,
    NationalId,
    Phone,
    Email,
}

impl Field {
    /// Label shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Identifier => "usuario",
            Self::Secret => "contraseña",
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::NationalId => "cédula",
            Self::Phone => "teléfono",
            Self::Email => "correo electrónico",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Local validation failures. These never reach the network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, ingrese {field}.")]
    MissingField { field: Field },
    #[error("Debes aceptar los términos y condiciones")]
    TermsNotAccepted,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
}
