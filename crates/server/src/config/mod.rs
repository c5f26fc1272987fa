//! Configuration management for the Makos.ai server
//!
//! Site settings are read from an optional RON file. Auth provider
//! credentials are never stored here; they come from the environment via
//! [`crate::auth::AuthConfig::from_env`].

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::analytics::GA_ADS_ID;

pub const DEFAULT_MEASUREMENT_ID: &str = "G-SZW6X77247";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub analytics: AnalyticsSettings,

    #[serde(default)]
    pub worksheet: WorksheetSettings,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.analytics.validate()?;
        self.worksheet.validate()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Public origin used for canonical and Open Graph URLs
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
}

impl ServerSettings {
    /// Cookies only get the `Secure` attribute when the site is served over https
    pub fn is_secure_origin(&self) -> bool {
        url::Url::parse(&self.site_origin).is_ok_and(|url| url.scheme() == "https")
    }

    fn validate(&self) -> Result<(), String> {
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("bind_addr '{}' is not a socket address", self.bind_addr));
        }

        match url::Url::parse(&self.site_origin) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(format!(
                "site_origin '{}' must be an absolute http(s) URL",
                self.site_origin
            )),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            site_origin: default_site_origin(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_site_origin() -> String {
    "https://makos.ai".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AuthSettings {
    /// How long a failed sign in stays on screen before returning to login
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl AuthSettings {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AnalyticsSettings {
    /// Google Analytics measurement id; `None` disables the tag entirely
    #[serde(default = "default_measurement_id")]
    pub measurement_id: Option<String>,

    /// Google Ads account id used for conversion tracking
    #[serde(default = "default_ads_id")]
    pub ads_id: String,
}

impl AnalyticsSettings {
    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some()
    }

    fn validate(&self) -> Result<(), String> {
        match &self.measurement_id {
            Some(id) if !is_tag_id(id) => Err(format!("measurement_id '{}' is not a tag id", id)),
            _ if !is_tag_id(&self.ads_id) => Err(format!("ads_id '{}' is not a tag id", self.ads_id)),
            _ => Ok(()),
        }
    }
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            measurement_id: default_measurement_id(),
            ads_id: default_ads_id(),
        }
    }
}

fn default_measurement_id() -> Option<String> {
    Some(DEFAULT_MEASUREMENT_ID.to_string())
}

fn default_ads_id() -> String {
    GA_ADS_ID.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WorksheetSettings {
    /// Model used for generation and answer verification
    #[serde(default = "default_model")]
    pub model: String,

    /// Messages endpoint of the model API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the model to re-check answers after generation
    #[serde(default = "default_verify_answers")]
    pub verify_answers: bool,

    /// Upper bound on questions per worksheet request
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

impl WorksheetSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("worksheet model cannot be empty".to_string());
        }
        match url::Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(format!("api_url '{}' must be an absolute http(s) URL", self.api_url)),
        }
        if self.max_tokens == 0 || self.timeout_secs == 0 || self.max_questions == 0 {
            return Err("max_tokens, timeout_secs and max_questions must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for WorksheetSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_url: default_api_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            verify_answers: default_verify_answers(),
            max_questions: default_max_questions(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-5-20250929".to_string()
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_timeout_secs() -> u64 {
    90
}

fn default_verify_answers() -> bool {
    true
}

fn default_max_questions() -> usize {
    50
}

/// Tag ids are interpolated into script tags, so keep them to `[A-Z0-9-]`
fn is_tag_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}
