use crate::{
    auth::HttpAuthClient,
    cli::{actions::outcome, globals::GlobalArgs},
    views::{LoginScreen, Router, View},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub identifier: String,
    pub password: SecretString,
}

/// Fill the login screen, submit it and follow the redirect.
///
/// # Errors
/// Returns an error if the client cannot be built, the form is invalid, or the
/// server rejects the credentials.
pub async fn execute(args: Args) -> Result<()> {
    let config = args.globals.auth_config()?;
    let client = HttpAuthClient::new(&config)?;
    let router = Arc::new(Router::starting_at(View::Login));
    let views = router.subscribe();

    let mut screen = LoginScreen::new(client, Arc::clone(&router), &config);
    screen.set_identifier(args.identifier);
    screen.set_secret(args.password.expose_secret());

    debug!(endpoint = %config.base_url, "{}", screen.submit_label());
    screen.submit().await;

    outcome::settle(&screen.status(), views, config.login_redirect_delay).await?;
    Ok(())
}
