//! Callback completion state machine
//!
//! A flow starts in [`CallbackState::Processing`] and settles exactly once in
//! either [`CallbackState::Success`] or [`CallbackState::Failed`]. Running a
//! settled flow again returns the recorded outcome and never calls the auth
//! client a second time.

use std::time::{Duration, Instant};

use metrics::histogram;

use super::callback::{AuthCallbackParams, Location};
use super::{AuthClient, AuthError, Session};

pub const NO_CODE_MESSAGE: &str = "No authentication code found";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackState {
    Processing,
    Success,
    Failed { message: String },
}

impl CallbackState {
    pub fn label(&self) -> &'static str {
        match self {
            CallbackState::Processing => "processing",
            CallbackState::Success => "success",
            CallbackState::Failed { .. } => "failed",
        }
    }
}

/// Where the browser goes once the flow has settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Immediate(Location),
    Delayed { to: Location, after: Duration },
}

impl Navigation {
    pub fn target(&self) -> &Location {
        match self {
            Navigation::Immediate(to) | Navigation::Delayed { to, .. } => to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CallbackOutcome {
    pub state: CallbackState,
    pub navigation: Navigation,
    /// Session returned by the provider on success
    pub session: Option<Session>,
    /// The session came from a fresh code exchange rather than an earlier
    /// sign in
    pub exchanged: bool,
}

/// Everything the flow reads from the incoming request
#[derive(Debug, Clone, Default)]
pub struct CallbackRequest {
    pub params: AuthCallbackParams,
    /// PKCE verifier held by the browser
    pub code_verifier: Option<String>,
    /// Access token from an earlier sign in
    pub access_token: Option<String>,
}

pub struct CallbackFlow {
    request: CallbackRequest,
    redirect_delay: Duration,
    outcome: Option<CallbackOutcome>,
}

impl CallbackFlow {
    pub fn new(request: CallbackRequest, redirect_delay: Duration) -> Self {
        Self {
            request,
            redirect_delay,
            outcome: None,
        }
    }

    pub fn state(&self) -> &CallbackState {
        self.outcome
            .as_ref()
            .map_or(&CallbackState::Processing, |outcome| &outcome.state)
    }

    pub fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&CallbackOutcome> {
        self.outcome.as_ref()
    }

    /// Drive the flow to a terminal state.
    pub async fn run(&mut self, client: &dyn AuthClient) -> &CallbackOutcome {
        let outcome = match self.outcome.take() {
            Some(outcome) => {
                tracing::debug!("callback flow already settled as {}", outcome.state.label());
                outcome
            }
            None => self.resolve(client).await,
        };

        self.outcome.insert(outcome)
    }

    async fn resolve(&self, client: &dyn AuthClient) -> CallbackOutcome {
        let params = &self.request.params;

        if let Some(message) = params.error_message() {
            tracing::warn!("auth provider returned an error: {}", message);
            return self.failed(message.to_string());
        }

        if let Some(code) = params.code() {
            let start = Instant::now();
            let result = client
                .exchange_code_for_session(code, self.request.code_verifier.as_deref())
                .await;
            histogram!("auth.exchange_ms").record(start.elapsed().as_millis() as f64);

            return match result {
                Ok(session) => self.succeeded(session, true),
                Err(err) => self.failed_with(err),
            };
        }

        match client
            .get_session(self.request.access_token.as_deref())
            .await
        {
            Ok(Some(session)) => self.succeeded(session, false),
            Ok(None) => self.failed(NO_CODE_MESSAGE.to_string()),
            Err(err) => self.failed_with(err),
        }
    }

    fn succeeded(&self, session: Session, exchanged: bool) -> CallbackOutcome {
        CallbackOutcome {
            state: CallbackState::Success,
            navigation: Navigation::Immediate(Location::Home),
            session: Some(session),
            exchanged,
        }
    }

    fn failed(&self, message: String) -> CallbackOutcome {
        CallbackOutcome {
            state: CallbackState::Failed { message },
            navigation: Navigation::Delayed {
                to: Location::login(),
                after: self.redirect_delay,
            },
            session: None,
            exchanged: false,
        }
    }

    fn failed_with(&self, err: AuthError) -> CallbackOutcome {
        match err {
            AuthError::Provider(message) => {
                tracing::warn!("auth provider rejected callback: {}", message);
                self.failed(message)
            }
            other => {
                tracing::error!("callback failed unexpectedly: {}", other);
                self.failed(UNEXPECTED_ERROR_MESSAGE.to_string())
            }
        }
    }
}
