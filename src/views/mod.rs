//! Top-level view routing. Views form a closed set so every switch over them is
//! exhaustive; the string names are only used at the edges (CLI, logs).

pub mod screens;

use std::{fmt, str::FromStr};
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

pub use screens::{LoginScreen, RegistrationScreen};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    Login,
    Register,
    Park,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Welcome, Self::Login, Self::Register, Self::Park];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Login => "login",
            Self::Register => "register",
            Self::Park => "park",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "SMARTPARKING",
            Self::Login => "Iniciar Sesión",
            Self::Register => "REGISTRO",
            Self::Park => "VISTA DE ESTACIONAR",
        }
    }

    /// Views the user can jump to directly from this one.
    #[must_use]
    pub const fn links(self) -> &'static [Self] {
        match self {
            Self::Welcome => &[Self::Park, Self::Login, Self::Register],
            Self::Login => &[Self::Register],
            Self::Register => &[Self::Welcome, Self::Login],
            Self::Park => &[Self::Welcome],
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == name.trim())
            .ok_or_else(|| UnknownView(name.to_string()))
    }
}

/// Capability to switch the visible view. Provided by whoever hosts the screens.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, view: View);
}

/// Holds the current view and notifies subscribers when it changes.
#[derive(Debug)]
pub struct Router {
    current: watch::Sender<View>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(View::Welcome)
    }

    #[must_use]
    pub fn starting_at(view: View) -> Self {
        let (current, _) = watch::channel(view);
        Self { current }
    }

    #[must_use]
    pub fn current(&self) -> View {
        *self.current.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.current.subscribe()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for Router {
    fn navigate_to(&self, view: View) {
        let previous = self.current.send_replace(view);
        info!(from = %previous, to = %view, "navigate");
    }
}
