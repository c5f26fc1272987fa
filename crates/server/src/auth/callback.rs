//! Provider redirect routing
//!
//! The identity provider sends the browser back to `/auth/callback`. This
//! module decides where the browser goes next without touching the network.

use url::form_urlencoded;

/// Query parameters attached to the provider's redirect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl AuthCallbackParams {
    /// Parse a raw query string. A repeated key keeps its first value and
    /// unknown keys are ignored, so no query is ever rejected.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(query) = query else {
            return params;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "code" => &mut params.code,
                "error" => &mut params.error,
                "error_description" => &mut params.error_description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    pub fn code(&self) -> Option<&str> {
        non_empty(&self.code)
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(&self.error)
    }

    pub fn error_description(&self) -> Option<&str> {
        non_empty(&self.error_description)
    }

    /// Message to show for a provider-reported error, preferring the
    /// description over the bare error code.
    pub fn error_message(&self) -> Option<&str> {
        let error = self.error()?;
        Some(self.error_description().unwrap_or(error))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Navigation targets of the auth flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Home,
    Login { error: Option<String> },
    CallbackHandle { code: String },
}

impl Location {
    pub fn login() -> Self {
        Location::Login { error: None }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Location::Home => "/",
            Location::Login { .. } => "/login",
            Location::CallbackHandle { .. } => "/auth/callback/handle",
        }
    }

    /// Origin-relative URI including the query string
    pub fn to_uri(&self) -> String {
        let query = match self {
            Location::Home | Location::Login { error: None } => None,
            Location::Login { error: Some(error) } => Some(("error", error.as_str())),
            Location::CallbackHandle { code } => Some(("code", code.as_str())),
        };

        match query {
            Some((key, value)) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair(key, value)
                    .finish();
                format!("{}?{}", self.path(), encoded)
            }
            None => self.path().to_string(),
        }
    }

    /// Short label used for metrics
    pub fn label(&self) -> &'static str {
        match self {
            Location::Home => "home",
            Location::Login { .. } => "login",
            Location::CallbackHandle { .. } => "handle",
        }
    }
}

/// Decide where a provider redirect goes next. First match wins:
/// an error goes to the login page, a code goes to the completion page, and
/// anything else goes home.
pub fn route_callback(params: &AuthCallbackParams) -> Location {
    if let Some(message) = params.error_message() {
        return Location::Login {
            error: Some(message.to_string()),
        };
    }

    if let Some(code) = params.code() {
        return Location::CallbackHandle {
            code: code.to_string(),
        };
    }

    Location::Home
}
