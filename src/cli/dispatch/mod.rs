use crate::cli::{
    actions::{Action, login, register},
    commands::{self, api, login as login_args, register as register_args},
    globals::GlobalArgs,
};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;
use std::time::Duration;

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(api::ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;

    let mut globals = GlobalArgs::new(api_url);
    globals.set_timeout(
        matches
            .get_one::<u64>(api::ARG_TIMEOUT)
            .copied()
            .map(Duration::from_secs),
    );

    // Fail early on a malformed URL instead of after the form is filled.
    globals.auth_config().context("invalid SMARTPARKING_API_URL")?;

    Ok(globals)
}

fn text(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(text(matches, id))
}

/// # Errors
/// Returns an error if no subcommand was given or the global arguments are invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((commands::CMD_LOGIN, sub)) => Ok(Action::Login(login::Args {
            globals: globals(sub)?,
            identifier: text(sub, login_args::ARG_IDENTIFIER),
            password: secret(sub, login_args::ARG_PASSWORD),
        })),
        Some((commands::CMD_REGISTER, sub)) => Ok(Action::Register(register::Args {
            globals: globals(sub)?,
            first_name: text(sub, register_args::ARG_FIRST_NAME),
            last_name: text(sub, register_args::ARG_LAST_NAME),
            national_id: text(sub, register_args::ARG_NATIONAL_ID),
            phone: text(sub, register_args::ARG_PHONE),
            email: text(sub, register_args::ARG_EMAIL),
            password: secret(sub, register_args::ARG_PASSWORD),
            confirm_password: secret(sub, register_args::ARG_CONFIRM_PASSWORD),
            accept_terms: sub.get_flag(register_args::ARG_ACCEPT_TERMS),
        })),
        Some((commands::CMD_VIEWS, _)) => Ok(Action::Views),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}
