//! # SmartParking (client core)
//!
//! `smartparking` holds the client side of the SmartParking reservation app: the
//! login and registration workflows and the router that moves the user between
//! the welcome, login, registration and parking views.
//!
//! ## Submission workflow
//!
//! 1. **Validate:** the form snapshot is checked locally (required fields, terms,
//!    password confirmation). Failures never reach the network.
//! 2. **Map:** form fields are translated to the external API's field names in
//!    [`auth::payload`], the only place that knows the backend contract.
//! 3. **Send:** [`auth::client`] performs a single `POST` and reduces the exchange to
//!    an [`auth::AuthOutcome`] (accepted, rejected or network failure).
//! 4. **Report:** [`auth::controller`] publishes the result as feedback and, on
//!    success, asks the navigator to move on after a short display delay.
//!
//! Only one submission per form can be in flight; extra submits are ignored.
//! Passwords are held as [`secrecy::SecretString`] and are never logged.

pub mod auth;
pub mod cli;
pub mod config;
pub mod views;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
