//! UI-facing state published by the submission controller. The presentation layer
//! renders these values; it never sees transport errors or form internals.

use super::client::AuthOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackKind {
    #[default]
    None,
    Info,
    Success,
    Error,
}

/// The single message slot shown above a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == FeedbackKind::None
    }

    /// Maps a settled attempt to what the user sees. Rejections and transport
    /// failures carry distinct prefixes.
    #[must_use]
    pub fn from_outcome(outcome: &AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::Accepted { message } => Self::success(message.clone()),
            AuthOutcome::Rejected { message } => Self::error(format!("Fallo: {message}")),
            AuthOutcome::NetworkFailure { message } => {
                Self::error(format!("Error de conexión: {message}"))
            }
        }
    }
}

/// Gates the submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
}

/// Where the controller is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Idle,
    Validating,
    Submitting,
    Settled(AuthOutcome),
}

/// Snapshot handed to subscribers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub stage: Stage,
    pub phase: SubmissionPhase,
    pub feedback: Feedback,
}

impl FormStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.phase == SubmissionPhase::InFlight
    }
}
