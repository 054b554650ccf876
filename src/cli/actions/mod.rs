pub mod login;
pub mod register;
pub mod views;

mod outcome;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    Views,
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails or the server reports a failure.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
