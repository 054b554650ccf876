pub mod api;
pub mod logging;
pub mod login;
pub mod register;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_VIEWS: &str = "views";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("smartparking")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(login::command())
        .subcommand(register::command())
        .subcommand(Command::new(CMD_VIEWS).about("List the application views and their links"));

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "smartparking");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("SMARTPARKING_IDENTIFIER", None::<&str>),
                ("SMARTPARKING_PASSWORD", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "smartparking",
                    "login",
                    "--identifier",
                    "V-12345678",
                    "--password",
                    "pw123",
                ]);

                let Some((name, login)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };
                assert_eq!(name, CMD_LOGIN);
                assert_eq!(
                    login.get_one::<String>(login::ARG_IDENTIFIER).cloned(),
                    Some("V-12345678".to_string())
                );
                assert_eq!(
                    login.get_one::<String>(login::ARG_PASSWORD).cloned(),
                    Some("pw123".to_string())
                );
                assert_eq!(
                    login.get_one::<String>(api::ARG_API_URL).cloned(),
                    Some(crate::config::DEFAULT_AUTH_URL.to_string())
                );
            },
        );
    }

    #[test]
    fn test_register_args() {
        let matches = new().get_matches_from(vec![
            "smartparking",
            "register",
            "--first-name",
            "Ana",
            "--last-name",
            "Pérez",
            "--national-id",
            "V-12345678",
            "--phone",
            "0414-5551234",
            "--email",
            "ana@example.com",
            "--password",
            "abc123",
            "--confirm-password",
            "abc123",
            "--accept-terms",
        ]);

        let Some((name, register)) = matches.subcommand() else {
            panic!("expected a subcommand");
        };
        assert_eq!(name, CMD_REGISTER);
        assert_eq!(
            register.get_one::<String>(register::ARG_LAST_NAME).cloned(),
            Some("Pérez".to_string())
        );
        assert!(register.get_flag(register::ARG_ACCEPT_TERMS));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SMARTPARKING_API_URL", Some("https://parking.tld/api/auth")),
                ("SMARTPARKING_TIMEOUT", Some("5")),
                ("SMARTPARKING_IDENTIFIER", Some("V-1")),
                ("SMARTPARKING_PASSWORD", Some("secret")),
                ("SMARTPARKING_LOG_LEVEL", Some("info")),
                ("SMARTPARKING_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["smartparking", "login"]);
                let Some((_, login)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };
                assert_eq!(
                    login.get_one::<String>(api::ARG_API_URL).cloned(),
                    Some("https://parking.tld/api/auth".to_string())
                );
                assert_eq!(
                    login
                        .get_one::<u64>(api::ARG_TIMEOUT)
                        .copied()
                        .map(Duration::from_secs),
                    Some(Duration::from_secs(5))
                );
                assert_eq!(
                    login.get_one::<String>(login::ARG_IDENTIFIER).cloned(),
                    Some("V-1".to_string())
                );
                assert_eq!(login.get_one::<u8>(logging::ARG_VERBOSITY).copied(), Some(2));
                assert_eq!(
                    logging::log_format(login),
                    crate::cli::telemetry::LogFormat::Json
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("SMARTPARKING_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["smartparking".to_string(), "views".to_string()];

                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);
                let Some((_, views)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };

                assert_eq!(
                    views.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["smartparking"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let result = new().try_get_matches_from(vec!["smartparking", "--timeout", "0", "views"]);
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_invalid_log_format() {
        let result =
            new().try_get_matches_from(vec!["smartparking", "--log-format", "yaml", "views"]);
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::ValueValidation)
        );
    }
}
