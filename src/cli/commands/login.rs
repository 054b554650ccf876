use clap::{Arg, Command};

pub const ARG_IDENTIFIER: &str = "identifier";
pub const ARG_PASSWORD: &str = "password";

#[must_use]
pub fn command() -> Command {
    Command::new(super::CMD_LOGIN)
        .about("Sign in and open the parking view")
        .arg(
            Arg::new(ARG_IDENTIFIER)
                .short('u')
                .long("identifier")
                .help("User identifier (national ID)")
                .env("SMARTPARKING_IDENTIFIER")
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long("password")
                .help("Account password")
                .env("SMARTPARKING_PASSWORD")
                .hide_env_values(true)
        )
}
