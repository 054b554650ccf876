//! Login and registration workflow: form state, local validation, payload
//! mapping, the HTTP client and the submission controller tying them together.
//! Passwords must never be logged anywhere in this module.

pub mod client;
pub mod controller;
pub mod errors;
pub mod feedback;
pub mod forms;
pub mod payload;
pub mod validate;

pub use client::{AuthApi, AuthOperation, AuthOutcome, HttpAuthClient};
pub use controller::{
    LoginController, RegistrationController, Submission, SubmissionController, Submit,
};
pub use errors::{Field, ValidationError};
pub use feedback::{Feedback, FeedbackKind, FormStatus, Stage, SubmissionPhase};
pub use forms::{LoginForm, RegistrationForm};
pub use payload::{LoginPayload, RegistrationPayload, to_login_payload, to_registration_payload};
pub use validate::{validate_login, validate_registration};
