//! Hosted authentication provider integration
//!
//! This module handles the OAuth/PKCE callback for the hosted auth provider.
//! The server never derives or verifies PKCE material itself: it forwards the
//! authorization code together with the browser-held code verifier and keeps
//! the session returned by the provider opaque.

pub mod callback;
pub mod cookies;
pub mod flow;
pub mod supabase;
pub mod view;

pub use callback::{AuthCallbackParams, Location, route_callback};
pub use cookies::CookieNames;
pub use flow::{CallbackFlow, CallbackOutcome, CallbackRequest, CallbackState, Navigation};
pub use supabase::{AuthConfig, SupabaseAuthClient};
pub use view::{CallbackView, Navigator, ScheduledRedirect};

use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

const FIRST_SIGN_IN_WINDOW_SECS: i64 = 60;

/// Session issued by the auth provider
///
/// The server reads the access token, the expiry and the user's sign-in
/// timestamps. Everything else, including fields this struct does not name,
/// is carried along untouched so the browser SDK can keep refreshing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Unix timestamp at which the access token expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Provider user object
    #[serde(default)]
    pub user: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            expires_in: None,
            expires_at: None,
            refresh_token: None,
            user: serde_json::Value::Null,
            extra: serde_json::Map::new(),
        }
    }

    /// Whether this session belongs to an account created by this sign in.
    /// The provider marks neither case explicitly, so the account's creation
    /// time is compared against its last sign in.
    pub fn is_first_sign_in(&self) -> bool {
        let timestamp = |field: &str| {
            self.user
                .get(field)
                .and_then(serde_json::Value::as_str)
                .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        };

        match (timestamp("created_at"), timestamp("last_sign_in_at")) {
            (Some(created), Some(signed_in)) => {
                (signed_in - created).num_seconds().abs() <= FIRST_SIGN_IN_WINDOW_SECS
            }
            _ => false,
        }
    }
}

/// Errors surfaced by an [`AuthClient`]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request and explained why
    #[error("{0}")]
    Provider(String),

    #[error("auth request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid auth provider response: {0}")]
    InvalidResponse(String),
}

/// Operations the callback flow needs from the hosted auth provider
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Exchange an authorization code (plus the PKCE verifier held by the
    /// browser) for a session.
    async fn exchange_code_for_session(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, AuthError>;

    /// Look up the session belonging to an access token previously issued by
    /// the provider. `Ok(None)` means there is no usable session.
    async fn get_session(&self, access_token: Option<&str>) -> Result<Option<Session>, AuthError>;
}
