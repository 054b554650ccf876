use crate::{
    auth::HttpAuthClient,
    cli::{actions::outcome, globals::GlobalArgs},
    views::{RegistrationScreen, Router, View},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

/// Fill the registration screen, submit it and follow the redirect to login.
///
/// # Errors
/// Returns an error if the client cannot be built, the form is invalid, or the
/// server rejects the registration.
pub async fn execute(args: Args) -> Result<()> {
    let config = args.globals.auth_config()?;
    let client = HttpAuthClient::new(&config)?;
    let router = Arc::new(Router::starting_at(View::Register));
    let views = router.subscribe();

    let mut screen = RegistrationScreen::new(client, Arc::clone(&router), &config);
    screen.set_first_name(args.first_name);
    screen.set_last_name(args.last_name);
    screen.set_national_id(args.national_id);
    screen.set_phone(args.phone);
    screen.set_email(args.email);
    screen.set_secret(args.password.expose_secret());
    screen.set_secret_confirm(args.confirm_password.expose_secret());
    screen.set_accepted_terms(args.accept_terms);

    debug!(endpoint = %config.base_url, "{}", screen.submit_label());
    screen.submit().await;

    outcome::settle(&screen.status(), views, config.registration_redirect_delay).await?;
    Ok(())
}
