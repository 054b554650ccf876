//! HTTP client for the authentication endpoint. Every call performs exactly one
//! `POST` and reduces the exchange to an [`AuthOutcome`], so transport errors never
//! leak past this module. There are no retries.

use super::payload::{LoginPayload, RegistrationPayload};
use crate::{APP_USER_AGENT, config::AuthConfig};
use anyhow::Result;
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::Serialize;
use serde_json::Value;
use std::{future::Future, sync::Arc};
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Shown when the server rejects a request without saying why.
pub const UNKNOWN_SERVER_ERROR: &str = "Error desconocido del servidor.";
/// Key carrying the message on success.
const MESSAGE_KEY: &str = "mensaje";
/// Keys carrying the message on failure, in lookup order.
const FAILURE_KEYS: [&str; 2] = ["detalle", "error"];

/// Result of one authentication attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted { message: String },
    Rejected { message: String },
    NetworkFailure { message: String },
}

impl AuthOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message }
            | Self::Rejected { message }
            | Self::NetworkFailure { message } => message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
}

impl AuthOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// Message used when a successful response carries none.
    #[must_use]
    pub const fn success_fallback(self) -> &'static str {
        match self {
            Self::Login => "Inicio de sesión exitoso.",
            Self::Register => "Registro exitoso.",
        }
    }
}

/// The two calls the submission controller needs from the backend.
pub trait AuthApi: Send + Sync {
    fn login(&self, payload: &LoginPayload) -> impl Future<Output = AuthOutcome> + Send;

    fn register(&self, payload: &RegistrationPayload) -> impl Future<Output = AuthOutcome> + Send;
}

impl<T: AuthApi> AuthApi for Arc<T> {
    fn login(&self, payload: &LoginPayload) -> impl Future<Output = AuthOutcome> + Send {
        (**self).login(payload)
    }

    fn register(&self, payload: &RegistrationPayload) -> impl Future<Output = AuthOutcome> + Send {
        (**self).register(payload)
    }
}

/// `reqwest` implementation of [`AuthApi`].
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    client: Client,
    endpoint: Url,
}

impl HttpAuthClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.base_url.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[instrument(
        name = "auth.request",
        skip_all,
        fields(operation = operation.as_str(), http.method = "POST", url = %self.endpoint)
    )]
    async fn post<B: Serialize + Sync>(&self, operation: AuthOperation, body: &B) -> AuthOutcome {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!("request failed: {}", err);
                return AuthOutcome::NetworkFailure {
                    message: self.diagnostic(&transport_detail(&err)),
                };
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                error!("failed to read response body: {}", err);
                return AuthOutcome::NetworkFailure {
                    message: self.diagnostic(&transport_detail(&err)),
                };
            }
        };

        match classify(operation, status, &text) {
            Some(outcome) => {
                match &outcome {
                    AuthOutcome::Accepted { .. } => debug!("accepted: {}", status),
                    _ => warn!("rejected: {}", status),
                }
                outcome
            }
            None => {
                error!("unexpected response body ({})", status);
                AuthOutcome::NetworkFailure {
                    message: self.diagnostic("respuesta inválida del servidor"),
                }
            }
        }
    }

    fn diagnostic(&self, detail: &str) -> String {
        format!(
            "{detail}. Verifique que el servidor esté activo y que la URL {} sea correcta.",
            self.endpoint
        )
    }
}

impl AuthApi for HttpAuthClient {
    async fn login(&self, payload: &LoginPayload) -> AuthOutcome {
        self.post(AuthOperation::Login, payload).await
    }

    async fn register(&self, payload: &RegistrationPayload) -> AuthOutcome {
        self.post(AuthOperation::Register, payload).await
    }
}

/// Classifies a received response. Returns `None` when the body is not JSON,
/// which callers treat as a failed exchange. JSON without a usable message field
/// (including non-object values) falls back to the default texts.
#[must_use]
pub fn classify(operation: AuthOperation, status: StatusCode, body: &str) -> Option<AuthOutcome> {
    let value: Value = serde_json::from_str(body).ok()?;

    if status.is_success() {
        let message = message_field(&value, MESSAGE_KEY)
            .unwrap_or(operation.success_fallback())
            .to_string();
        Some(AuthOutcome::Accepted { message })
    } else {
        let message = FAILURE_KEYS
            .iter()
            .find_map(|key| message_field(&value, key))
            .unwrap_or(UNKNOWN_SERVER_ERROR)
            .to_string();
        Some(AuthOutcome::Rejected { message })
    }
}

fn message_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
}

fn transport_detail(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "la solicitud excedió el tiempo de espera".to_string()
    } else if err.is_connect() {
        "no se pudo conectar con el servidor".to_string()
    } else if err.is_decode() || err.is_body() {
        "no se pudo leer la respuesta del servidor".to_string()
    } else {
        err.to_string()
    }
}
