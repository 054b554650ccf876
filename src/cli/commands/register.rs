use clap::{Arg, ArgAction, Command};

pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_NATIONAL_ID: &str = "national-id";
pub const ARG_PHONE: &str = "phone";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_ACCEPT_TERMS: &str = "accept-terms";

fn text_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help)
}

#[must_use]
pub fn command() -> Command {
    Command::new(super::CMD_REGISTER)
        .about("Create an account")
        .arg(text_arg(ARG_FIRST_NAME, "First name"))
        .arg(text_arg(ARG_LAST_NAME, "Last name"))
        .arg(text_arg(ARG_NATIONAL_ID, "National ID, also used to sign in"))
        .arg(text_arg(ARG_PHONE, "Phone number"))
        .arg(text_arg(ARG_EMAIL, "Email address"))
        .arg(
            text_arg(ARG_PASSWORD, "Account password")
                .env("SMARTPARKING_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            text_arg(ARG_CONFIRM_PASSWORD, "Repeat the password")
                .env("SMARTPARKING_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_ACCEPT_TERMS)
                .long(ARG_ACCEPT_TERMS)
                .help("Accept the terms and conditions")
                .action(ArgAction::SetTrue),
        )
}
