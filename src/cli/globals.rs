use crate::config::AuthConfig;
use anyhow::Result;
use std::time::Duration;

/// Arguments shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            timeout: None,
        }
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// # Errors
    /// Returns an error if the API URL is not a valid http(s) URL.
    pub fn auth_config(&self) -> Result<AuthConfig> {
        Ok(AuthConfig::new(&self.api_url)?.with_timeout(self.timeout))
    }
}
