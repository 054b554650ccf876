//! Headless login and registration screens. Each one owns its form state and its
//! submission controller; a front end binds inputs to the setters and renders
//! [`FormStatus`] plus the submit label.

use super::{Navigator, View};
use crate::{
    auth::{
        AuthApi, FormStatus, LoginController, LoginForm, RegistrationController,
        RegistrationForm, Submission,
    },
    config::AuthConfig,
};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::watch;

pub const FORGOT_PASSWORD_NOTICE: &str = "Funcionalidad de recuperación pendiente.";
pub const TERMS_NOTICE: &str = "Términos y Condiciones de SmartParking";

pub struct LoginScreen<A, N> {
    form: LoginForm,
    controller: LoginController<A, N>,
}

impl<A, N> LoginScreen<A, N>
where
    A: AuthApi,
    N: Navigator + 'static,
{
    #[must_use]
    pub fn new(api: A, navigator: Arc<N>, config: &AuthConfig) -> Self {
        Self {
            form: LoginForm::default(),
            controller: LoginController::new(api, navigator, config.login_redirect_delay),
        }
    }

    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.form.identifier = identifier.into();
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.form.secret = SecretString::from(secret.into());
    }

    /// Submits the current form.
    ///
    /// # Cancel safety
    /// Dropping the future before it completes abandons the request and returns
    /// the screen to `Idle`; see [`SubmissionController::submit`](crate::auth::SubmissionController::submit).
    pub async fn submit(&self) -> Submission {
        self.controller.submit(&self.form).await
    }

    pub fn forgot_password(&self) {
        self.controller.inform(FORGOT_PASSWORD_NOTICE);
    }

    pub fn create_account(&self) {
        self.controller.navigator().navigate_to(View::Register);
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.controller.status()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.controller.subscribe()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.status().is_in_flight()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.status().is_in_flight() {
            "Verificando..."
        } else {
            "ENTRAR"
        }
    }
}

pub struct RegistrationScreen<A, N> {
    form: RegistrationForm,
    controller: RegistrationController<A, N>,
}

impl<A, N> RegistrationScreen<A, N>
where
    A: AuthApi,
    N: Navigator + 'static,
{
    #[must_use]
    pub fn new(api: A, navigator: Arc<N>, config: &AuthConfig) -> Self {
        Self {
            form: RegistrationForm::default(),
            controller: RegistrationController::new(
                api,
                navigator,
                config.registration_redirect_delay,
            ),
        }
    }

    #[must_use]
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
    }

    pub fn set_national_id(&mut self, value: impl Into<String>) {
        self.form.national_id = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.form.secret = SecretString::from(value.into());
    }

    pub fn set_secret_confirm(&mut self, value: impl Into<String>) {
        self.form.secret_confirm = SecretString::from(value.into());
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.form.accepted_terms = accepted;
    }

    /// Submits the current form.
    ///
    /// # Cancel safety
    /// Dropping the future before it completes abandons the request and returns
    /// the screen to `Idle`; see [`SubmissionController::submit`](crate::auth::SubmissionController::submit).
    pub async fn submit(&self) -> Submission {
        self.controller.submit(&self.form).await
    }

    pub fn show_terms(&self) {
        self.controller.inform(TERMS_NOTICE);
    }

    pub fn go_home(&self) {
        self.controller.navigator().navigate_to(View::Welcome);
    }

    pub fn have_account(&self) {
        self.controller.navigator().navigate_to(View::Login);
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.controller.status()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.controller.subscribe()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.status().is_in_flight()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.status().is_in_flight() {
            "Registrando..."
        } else {
            "REGISTRARME"
        }
    }
}
