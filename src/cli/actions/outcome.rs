use crate::{
    auth::{FeedbackKind, FormStatus},
    views::View,
};
use anyhow::{Context, Result, anyhow};
use std::time::Duration;
use tokio::{sync::watch, time::timeout};

/// Extra time allowed past the redirect delay before giving up on navigation.
const NAVIGATION_GRACE: Duration = Duration::from_secs(1);

/// Prints the settled feedback and, after a success, waits for the redirect.
///
/// Error feedback becomes the returned error so the process exits non-zero.
pub(super) async fn settle(
    status: &FormStatus,
    mut views: watch::Receiver<View>,
    redirect_delay: Duration,
) -> Result<View> {
    let feedback = &status.feedback;

    match feedback.kind {
        FeedbackKind::Error => Err(anyhow!(feedback.text.clone())),
        FeedbackKind::Success => {
            println!("{}", feedback.text);

            timeout(redirect_delay + NAVIGATION_GRACE, views.changed())
                .await
                .context("timed out waiting for navigation")?
                .context("view router closed")?;

            let view = *views.borrow_and_update();
            println!("{} ({view})", view.title());
            Ok(view)
        }
        FeedbackKind::Info | FeedbackKind::None => {
            if !feedback.text.is_empty() {
                println!("{}", feedback.text);
            }
            Ok(*views.borrow())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::Feedback,
        views::{Navigator, Router},
    };
    use std::sync::Arc;

    fn status(feedback: Feedback) -> FormStatus {
        FormStatus {
            feedback,
            ..FormStatus::default()
        }
    }

    #[tokio::test]
    async fn error_feedback_becomes_error() {
        let router = Router::starting_at(View::Login);
        let result = settle(
            &status(Feedback::error("Fallo: Credenciales inválidas")),
            router.subscribe(),
            Duration::ZERO,
        )
        .await;

        let Err(err) = result else {
            panic!("expected an error");
        };
        assert_eq!(err.to_string(), "Fallo: Credenciales inválidas");
    }

    #[tokio::test(start_paused = true)]
    async fn success_waits_for_redirect() -> Result<()> {
        let router = Arc::new(Router::starting_at(View::Login));
        let views = router.subscribe();

        let navigator = Arc::clone(&router);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1500)).await;
            navigator.navigate_to(View::Park);
        });

        let view = settle(
            &status(Feedback::success("Bienvenido")),
            views,
            Duration::from_millis(1500),
        )
        .await?;
        assert_eq!(view, View::Park);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn success_without_redirect_times_out() {
        let router = Router::starting_at(View::Login);
        let result = settle(
            &status(Feedback::success("Bienvenido")),
            router.subscribe(),
            Duration::from_millis(10),
        )
        .await;
        assert!(result.is_err());
    }
}
