//! Hosted auth client
//!
//! Talks to the provider's GoTrue REST API. Only the two calls the callback
//! flow needs are implemented: the PKCE code exchange and a session lookup.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use super::cookies::CookieNames;
use super::{AuthClient, AuthError, Session};

const URL_VARS: &[&str] = &["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
const ANON_KEY_VARS: &[&str] = &["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

/// Credentials for the hosted auth provider
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Service URL (e.g. https://<project>.supabase.co)
    pub url: Url,
    /// Public anonymous API key
    pub anon_key: String,
}

impl AuthConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self> {
        let mut url = Url::parse(url).with_context(|| format!("Invalid auth service URL: {}", url))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(anyhow!("Auth service URL must be http(s), got {}", other)),
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(anyhow!("Auth anon key cannot be empty"));
        }

        Ok(Self { url, anon_key })
    }

    /// Read credentials from the environment. Both values are required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()))
        };

        let url = first(URL_VARS)
            .with_context(|| format!("{} environment variable must be set", URL_VARS[0]))?;
        let anon_key = first(ANON_KEY_VARS)
            .with_context(|| format!("{} environment variable must be set", ANON_KEY_VARS[0]))?;

        Self::new(&url, anon_key)
    }

    pub fn cookie_names(&self) -> CookieNames {
        CookieNames::for_provider(&self.url)
    }
}

#[derive(Serialize)]
struct PkceGrant<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

/// Error body shapes returned by the provider
#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|message| !message.is_empty())
    }
}

pub struct SupabaseAuthClient {
    config: AuthConfig,
    http_client: reqwest::Client,
}

impl SupabaseAuthClient {
    pub fn new(config: AuthConfig) -> Result<Self> {
        Ok(Self {
            config,
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .context("Failed to create HTTP client")?,
        })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.config
            .url
            .join(path)
            .map_err(|e| AuthError::InvalidResponse(format!("bad endpoint {}: {}", path, e)))
    }

    async fn provider_error(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProviderErrorBody>(&body)
            .ok()
            .and_then(ProviderErrorBody::into_message)
            .unwrap_or_else(|| format!("Authentication failed ({})", status));
        AuthError::Provider(message)
    }
}

#[async_trait]
impl AuthClient for SupabaseAuthClient {
    async fn exchange_code_for_session(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, AuthError> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "pkce");

        let response = self
            .http_client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&PkceGrant {
                auth_code: code,
                code_verifier: code_verifier.unwrap_or_default(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str::<Session>(&body)
            .map_err(|e| AuthError::InvalidResponse(format!("session payload: {}", e)))
    }

    async fn get_session(&self, access_token: Option<&str>) -> Result<Option<Session>, AuthError> {
        let Some(access_token) = access_token.filter(|token| !token.is_empty()) else {
            return Ok(None);
        };

        let response = self
            .http_client
            .get(self.endpoint("auth/v1/user")?)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Ok(None),
            status if !status.is_success() => return Err(Self::provider_error(response).await),
            _ => {}
        }

        let user = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("user payload: {}", e)))?;

        Ok(Some(Session {
            user,
            token_type: Some("bearer".to_string()),
            ..Session::new(access_token)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupabaseAuthClient {
        let config = AuthConfig::new(&server.uri(), "anon-key").unwrap();
        SupabaseAuthClient::new(config).unwrap()
    }

    #[test]
    fn test_config_requires_both_values() {
        let vars: HashMap<&str, &str> = [("SUPABASE_URL", "https://proj.supabase.co")].into();
        let err = AuthConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_ANON_KEY"));

        let vars: HashMap<&str, &str> = [("SUPABASE_ANON_KEY", "key")].into();
        let err = AuthConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));
    }

    #[test]
    fn test_config_accepts_public_prefixed_names() {
        let vars: HashMap<&str, &str> = [
            ("NEXT_PUBLIC_SUPABASE_URL", "https://proj.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "key"),
        ]
        .into();
        let config = AuthConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.url.as_str(), "https://proj.supabase.co/");
        assert_eq!(config.anon_key, "key");
        assert_eq!(config.cookie_names().session, "sb-proj-auth-token");
    }

    #[test]
    fn test_config_rejects_bad_url() {
        assert!(AuthConfig::new("not a url", "key").is_err());
        assert!(AuthConfig::new("ftp://proj.supabase.co", "key").is_err());
        assert!(AuthConfig::new("https://proj.supabase.co", " ").is_err());
    }

    #[tokio::test]
    async fn test_exchange_code_posts_pkce_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "pkce"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({"auth_code": "code-1", "code_verifier": "verifier-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-1",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh-1",
                "user": {"id": "user-1"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server)
            .exchange_code_for_session("code-1", Some("verifier-1"))
            .await
            .unwrap();

        assert_eq!(session.access_token, "access-1");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(session.user["id"], "user-1");
    }

    #[tokio::test]
    async fn test_exchange_code_surfaces_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid code verifier"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .exchange_code_for_session("code-1", None)
            .await
            .unwrap_err();

        match err {
            AuthError::Provider(message) => assert_eq!(message, "Invalid code verifier"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exchange_code_rejects_malformed_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .exchange_code_for_session("code-1", Some("v"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_get_session_with_valid_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "user-1"})))
            .mount(&server)
            .await;

        let session = client_for(&server)
            .get_session(Some("access-1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.access_token, "access-1");
        assert_eq!(session.user["id"], "user-1");
    }

    #[tokio::test]
    async fn test_get_session_with_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "invalid JWT"})))
            .mount(&server)
            .await;

        let session = client_for(&server).get_session(Some("stale")).await.unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_get_session_without_token_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = client_for(&server).get_session(None).await.unwrap();
        assert!(session.is_none());
    }
}
