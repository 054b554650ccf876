//! Submission controller: validate, map, send, report, and on success navigate
//! after a short delay so the confirmation stays on screen.
//!
//! The controller is shared by reference with the presentation layer. Its state
//! lives in a `watch` channel, so subscribers can repaint while a request is in
//! flight and the in-flight check is a single atomic update. A `submit` that
//! arrives while another one is in flight returns [`Submission::Ignored`] and
//! sends nothing.

use super::{
    client::{AuthApi, AuthOperation, AuthOutcome},
    errors::ValidationError,
    feedback::{Feedback, FormStatus, Stage, SubmissionPhase},
    forms::{LoginForm, RegistrationForm},
    payload::{LoginPayload, RegistrationPayload, to_login_payload, to_registration_payload},
    validate::{validate_login, validate_registration},
};
use crate::views::{Navigator, View};
use std::{future::Future, marker::PhantomData, sync::Arc, time::Duration};
use tokio::{sync::watch, time::sleep};
use tracing::{Instrument, debug, info, info_span, warn};
use ulid::Ulid;

/// A form the controller knows how to submit.
pub trait Submit: Send + Sync {
    type Payload: Send + Sync;

    const OPERATION: AuthOperation;
    /// Where the user goes after a successful submission.
    const NEXT_VIEW: View;

    /// # Errors
    /// Returns the first local validation failure.
    fn validate(&self) -> Result<(), ValidationError>;

    fn payload(&self) -> Self::Payload;

    fn send<A: AuthApi>(
        api: &A,
        payload: &Self::Payload,
    ) -> impl Future<Output = AuthOutcome> + Send;
}

impl Submit for LoginForm {
    type Payload = LoginPayload;

    const OPERATION: AuthOperation = AuthOperation::Login;
    const NEXT_VIEW: View = View::Park;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_login(self)
    }

    fn payload(&self) -> LoginPayload {
        to_login_payload(self)
    }

    fn send<A: AuthApi>(
        api: &A,
        payload: &LoginPayload,
    ) -> impl Future<Output = AuthOutcome> + Send {
        api.login(payload)
    }
}

impl Submit for RegistrationForm {
    type Payload = RegistrationPayload;

    const OPERATION: AuthOperation = AuthOperation::Register;
    const NEXT_VIEW: View = View::Login;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_registration(self)
    }

    fn payload(&self) -> RegistrationPayload {
        to_registration_payload(self)
    }

    fn send<A: AuthApi>(
        api: &A,
        payload: &RegistrationPayload,
    ) -> impl Future<Output = AuthOutcome> + Send {
        api.register(payload)
    }
}

/// What a call to [`SubmissionController::submit`] ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Another submission was in flight; nothing happened.
    Ignored,
    /// Stopped before the network.
    Invalid(ValidationError),
    /// The request went out and settled.
    Settled(AuthOutcome),
}

pub struct SubmissionController<F, A, N> {
    api: A,
    navigator: Arc<N>,
    redirect_delay: Duration,
    status: watch::Sender<FormStatus>,
    form: PhantomData<fn(&F)>,
}

pub type LoginController<A, N> = SubmissionController<LoginForm, A, N>;
pub type RegistrationController<A, N> = SubmissionController<RegistrationForm, A, N>;

impl<F, A, N> SubmissionController<F, A, N>
where
    F: Submit,
    A: AuthApi,
    N: Navigator + 'static,
{
    #[must_use]
    pub fn new(api: A, navigator: Arc<N>, redirect_delay: Duration) -> Self {
        let (status, _) = watch::channel(FormStatus::default());
        Self {
            api,
            navigator,
            redirect_delay,
            status,
            form: PhantomData,
        }
    }

    /// Latest published state.
    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn navigator(&self) -> &Arc<N> {
        &self.navigator
    }

    /// Replaces the feedback with an informational message.
    pub fn inform(&self, text: impl Into<String>) {
        let feedback = Feedback::info(text);
        self.status.send_modify(|status| status.feedback = feedback);
    }

    /// Runs one submission over a snapshot of `form`.
    ///
    /// # Cancel safety
    /// Dropping the returned future before it completes abandons the request:
    /// the form goes back to `Idle` without feedback and no navigation is
    /// scheduled. Drive it to completion to observe the outcome.
    pub async fn submit(&self, form: &F) -> Submission {
        let submission_id = Ulid::new();
        let span = info_span!(
            "submission",
            operation = F::OPERATION.as_str(),
            submission_id = %submission_id
        );
        self.run(form).instrument(span).await
    }

    async fn run(&self, form: &F) -> Submission {
        let started = self.status.send_if_modified(|status| {
            if status.is_in_flight() {
                return false;
            }
            status.stage = Stage::Validating;
            status.phase = SubmissionPhase::InFlight;
            status.feedback = Feedback::none();
            true
        });

        if !started {
            debug!("submission already in flight, ignoring");
            return Submission::Ignored;
        }
        let mut guard = InFlightGuard::new(&self.status);

        if let Err(err) = form.validate() {
            debug!("validation failed: {}", err);
            guard.disarm();
            let feedback = Feedback::error(err.to_string());
            self.status.send_modify(|status| {
                status.stage = Stage::Idle;
                status.phase = SubmissionPhase::Idle;
                status.feedback = feedback;
            });
            return Submission::Invalid(err);
        }

        let payload = form.payload();
        self.status
            .send_modify(|status| status.stage = Stage::Submitting);

        let outcome = F::send(&self.api, &payload).await;
        info!(accepted = outcome.is_accepted(), "submission settled");

        let feedback = Feedback::from_outcome(&outcome);
        guard.disarm();
        self.status.send_modify(|status| {
            status.stage = Stage::Settled(outcome.clone());
            status.phase = SubmissionPhase::Idle;
            status.feedback = feedback;
        });

        if outcome.is_accepted() {
            self.schedule_navigation();
        }

        Submission::Settled(outcome)
    }

    fn schedule_navigation(&self) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        let view = F::NEXT_VIEW;
        debug!(to = %view, ?delay, "navigation scheduled");

        tokio::spawn(
            async move {
                sleep(delay).await;
                navigator.navigate_to(view);
            }
            .in_current_span(),
        );
    }
}

/// Puts the form back to `Idle` when a submission is dropped before it settles.
struct InFlightGuard<'a> {
    status: Option<&'a watch::Sender<FormStatus>>,
}

impl<'a> InFlightGuard<'a> {
    fn new(status: &'a watch::Sender<FormStatus>) -> Self {
        Self {
            status: Some(status),
        }
    }

    fn disarm(&mut self) {
        self.status = None;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Some(status) = self.status.take() {
            warn!("submission dropped before settling");
            status.send_modify(|status| {
                status.stage = Stage::Idle;
                status.phase = SubmissionPhase::Idle;
            });
        }
    }
}
