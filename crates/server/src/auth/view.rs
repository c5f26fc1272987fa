//! Embeddable callback view
//!
//! Couples a [`CallbackFlow`] with a navigator and owns the timer behind any
//! delayed redirect. Tearing the view down (or dropping it) cancels a pending
//! redirect, so a stale navigation never fires.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::AuthClient;
use super::callback::Location;
use super::flow::{CallbackFlow, CallbackState, Navigation};
use crate::layout::escape_html;

/// Performs navigation on behalf of a view
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, to: &Location);
}

/// A navigation that fires after a delay unless cancelled first
pub struct ScheduledRedirect {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledRedirect {
    pub fn schedule(navigator: Arc<dyn Navigator>, to: Location, after: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("scheduled redirect to {} cancelled", to.path());
                }
                _ = tokio::time::sleep(after) => {
                    navigator.navigate(&to);
                }
            }
        });

        Self { cancel, handle }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledRedirect {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

pub struct CallbackView {
    flow: CallbackFlow,
    navigator: Arc<dyn Navigator>,
    pending: Option<ScheduledRedirect>,
}

impl CallbackView {
    pub fn new(flow: CallbackFlow, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            flow,
            navigator,
            pending: None,
        }
    }

    pub fn state(&self) -> &CallbackState {
        self.flow.state()
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    /// Run the flow and act on its navigation. Mounting an already settled
    /// view neither calls the auth client nor navigates again.
    pub async fn mount(&mut self, client: &dyn AuthClient) -> &CallbackState {
        let first_run = !self.flow.is_settled();
        let outcome = self.flow.run(client).await;

        if first_run {
            match &outcome.navigation {
                Navigation::Immediate(to) => self.navigator.navigate(to),
                Navigation::Delayed { to, after } => {
                    self.pending = Some(ScheduledRedirect::schedule(
                        Arc::clone(&self.navigator),
                        to.clone(),
                        *after,
                    ));
                }
            }
        }

        self.flow.state()
    }

    /// Cancel any pending redirect
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn render(&self) -> String {
        render_state(self.state())
    }
}

/// Markup for a callback state: a spinner while processing, an error panel
/// once failed.
pub fn render_state(state: &CallbackState) -> String {
    match state {
        CallbackState::Processing | CallbackState::Success => r#"<div class="callback">
    <div class="spinner" role="status"></div>
    <p class="status">Completing sign in...</p>
</div>"#
            .to_string(),
        CallbackState::Failed { message } => format!(
            r#"<div class="callback">
    <div class="error-panel" role="alert">
        <p class="error">{}</p>
        <p class="hint">Redirecting to login...</p>
    </div>
</div>"#,
            escape_html(message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::flow::CallbackRequest;
    use crate::auth::flow::tests::{FakeAuthClient, Reply};
    use crate::auth::AuthCallbackParams;
    use std::sync::Mutex;
    use std::sync::atomic::Ordering;

    const DELAY: Duration = Duration::from_millis(2000);

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<Location>>,
    }

    impl RecordingNavigator {
        fn visits(&self) -> Vec<Location> {
            self.visits.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, to: &Location) {
            self.visits.lock().unwrap().push(to.clone());
        }
    }

    fn view_with_code(navigator: &Arc<RecordingNavigator>) -> CallbackView {
        let request = CallbackRequest {
            params: AuthCallbackParams {
                code: Some("code".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let navigator: Arc<dyn Navigator> = navigator.clone();
        CallbackView::new(CallbackFlow::new(request, DELAY), navigator)
    }

    #[test]
    fn test_processing_renders_spinner() {
        let html = render_state(&CallbackState::Processing);
        assert!(html.contains("Completing sign in..."));
    }

    #[test]
    fn test_failed_renders_escaped_message() {
        let html = render_state(&CallbackState::Failed {
            message: "<b>bad</b>".to_string(),
        });
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(html.contains("Redirecting to login..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_navigates_home_immediately() {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = FakeAuthClient::new(Reply::Session("token"), Reply::NoSession);
        let mut view = view_with_code(&navigator);

        let state = view.mount(&client).await.clone();

        assert_eq!(state, CallbackState::Success);
        assert_eq!(navigator.visits(), vec![Location::Home]);
        assert!(!view.has_pending_redirect());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_redirects_after_delay() {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = FakeAuthClient::new(Reply::ProviderError("bad code"), Reply::NoSession);
        let mut view = view_with_code(&navigator);

        view.mount(&client).await;
        assert!(view.render().contains("bad code"));
        assert!(navigator.visits().is_empty());

        tokio::time::sleep(DELAY / 2).await;
        assert!(navigator.visits().is_empty());

        tokio::time::sleep(DELAY).await;
        assert_eq!(navigator.visits(), vec![Location::login()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_redirect() {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = FakeAuthClient::new(Reply::ProviderError("bad code"), Reply::NoSession);
        let mut view = view_with_code(&navigator);

        view.mount(&client).await;
        view.teardown();

        tokio::time::sleep(DELAY * 2).await;
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_view_does_not_navigate() {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = FakeAuthClient::new(Reply::ProviderError("bad code"), Reply::NoSession);
        let mut view = view_with_code(&navigator);

        view.mount(&client).await;
        drop(view);

        tokio::time::sleep(DELAY * 2).await;
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_does_not_exchange_or_navigate_again() {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = FakeAuthClient::new(Reply::Session("token"), Reply::NoSession);
        let mut view = view_with_code(&navigator);

        view.mount(&client).await;
        view.mount(&client).await;

        assert_eq!(client.exchange_calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.visits(), vec![Location::Home]);
    }
}
