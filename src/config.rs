//! Client configuration for the authentication endpoint and redirect timing.
//! Values come from the command line or the embedding front end; nothing here is
//! secret.

use anyhow::{Context, Result, anyhow};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Endpoint used when no override is given.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:3000/api/auth";
/// How long a successful login message stays visible before moving to parking.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// How long a successful registration message stays visible before moving to login.
pub const REGISTRATION_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: Url,
    /// Upper bound for a whole request. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
    pub login_redirect_delay: Duration,
    pub registration_redirect_delay: Duration,
}

impl AuthConfig {
    /// Builds a config for `base_url` with the default redirect delays.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed, is not http(s), or has no host.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
            login_redirect_delay: LOGIN_REDIRECT_DELAY,
            registration_redirect_delay: REGISTRATION_REDIRECT_DELAY,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_redirect_delays(mut self, login: Duration, registration: Duration) -> Self {
        self.login_redirect_delay = login;
        self.registration_redirect_delay = registration;
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("invalid auth URL: {trimmed}"))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}")),
    }

    if url.host().is_none() {
        return Err(anyhow!("Error parsing URL: no host specified"));
    }

    debug!("auth endpoint: {}", url);

    Ok(url)
}
