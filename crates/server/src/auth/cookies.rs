//! Auth cookie naming and encoding
//!
//! Cookie names and value encoding follow the hosted provider's browser SDK so
//! that a verifier or session written in the browser can be read back here,
//! and a session written here is picked up by the SDK on the next page load.
//!
//! The SDK stores JSON, optionally wrapped as `base64-<base64url>`. Values
//! larger than [`MAX_CHUNK_SIZE`] are split over `<name>.0`, `<name>.1`, ...

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use url::Url;

use super::Session;

const BASE64_PREFIX: &str = "base64-";

/// Largest value written to a single cookie before chunking
pub const MAX_CHUNK_SIZE: usize = 3180;

/// Names and attributes of the cookies shared with the provider's browser SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieNames {
    pub session: String,
    pub code_verifier: String,
    secure: bool,
}

impl CookieNames {
    /// Derive cookie names from the provider URL. The project ref is the first
    /// label of the host name.
    pub fn for_provider(url: &Url) -> Self {
        let project_ref = url
            .host_str()
            .and_then(|host| host.split('.').next())
            .filter(|label| !label.is_empty())
            .unwrap_or("auth");

        let session = format!("sb-{project_ref}-auth-token");
        Self {
            code_verifier: format!("{session}-code-verifier"),
            session,
            secure: true,
        }
    }

    /// Whether written cookies carry the `Secure` attribute. Plain-http
    /// origins need this off or the browser drops the cookie.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn code_verifier(&self, jar: &CookieJar) -> Option<String> {
        read_chunked(jar, &self.code_verifier).and_then(|raw| decode_code_verifier(&raw))
    }

    /// Session previously stored by the SDK or by [`Self::store_session`]
    pub fn stored_session(&self, jar: &CookieJar) -> Option<Session> {
        let raw = read_chunked(jar, &self.session)?;
        let json = decode_cookie_value(&raw)?;
        match serde_json::from_str::<Session>(&json) {
            Ok(session) if !session.access_token.is_empty() => Some(session),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("ignoring unreadable session cookie: {}", err);
                None
            }
        }
    }

    pub fn access_token(&self, jar: &CookieJar) -> Option<String> {
        self.stored_session(jar).map(|session| session.access_token)
    }

    /// Store the session in the SDK's encoding and drop the spent code
    /// verifier. The session cookie stays readable from script because the
    /// browser SDK reads it.
    pub fn store_session(&self, jar: CookieJar, session: &Session) -> CookieJar {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!("failed to encode session cookie: {}", err);
                return jar;
            }
        };
        let encoded = encode_cookie_value(&json);
        let max_age = session
            .expires_in
            .and_then(|secs| i64::try_from(secs).ok())
            .map(time::Duration::seconds);

        let chunks = split_chunks(&encoded);
        let mut jar = clear_cookie(jar, &self.session);
        jar = clear_cookie(jar, &self.code_verifier);

        let single = chunks.len() == 1;
        for (index, chunk) in chunks.into_iter().enumerate() {
            let name = if single {
                self.session.clone()
            } else {
                format!("{}.{}", self.session, index)
            };
            jar = jar.add(self.session_cookie(name, chunk.to_string(), max_age));
        }
        jar
    }

    fn session_cookie(
        &self,
        name: String,
        value: String,
        max_age: Option<time::Duration>,
    ) -> Cookie<'static> {
        let mut cookie = Cookie::build((name, value))
            .path("/")
            .http_only(false)
            .secure(self.secure)
            .same_site(SameSite::Lax);
        if let Some(max_age) = max_age {
            cookie = cookie.max_age(max_age);
        }
        cookie.build()
    }
}

/// Read a cookie that may have been split into numbered chunks. An unchunked
/// cookie wins over chunks of the same name.
fn read_chunked(jar: &CookieJar, name: &str) -> Option<String> {
    if let Some(cookie) = jar.get(name) {
        return Some(cookie.value().to_string()).filter(|value| !value.is_empty());
    }

    let mut value = String::new();
    for index in 0.. {
        match jar.get(&format!("{name}.{index}")) {
            Some(chunk) => value.push_str(chunk.value()),
            None => break,
        }
    }
    Some(value).filter(|value| !value.is_empty())
}

fn chunk_index(cookie_name: &str, base: &str) -> Option<usize> {
    cookie_name
        .strip_prefix(base)?
        .strip_prefix('.')?
        .parse()
        .ok()
}

/// Remove `base` and all of its chunks from the jar
fn clear_cookie(jar: CookieJar, base: &str) -> CookieJar {
    let stale: Vec<String> = jar
        .iter()
        .map(|cookie| cookie.name().to_string())
        .filter(|name| name == base || chunk_index(name, base).is_some())
        .collect();

    stale.into_iter().fold(jar, |jar, name| {
        jar.remove(Cookie::build((name, "")).path("/"))
    })
}

fn split_chunks(value: &str) -> Vec<&str> {
    if value.len() <= MAX_CHUNK_SIZE {
        return vec![value];
    }
    // Encoded values are ASCII, so every byte offset is a char boundary.
    (0..value.len())
        .step_by(MAX_CHUNK_SIZE)
        .filter_map(|start| value.get(start..(start + MAX_CHUNK_SIZE).min(value.len())))
        .collect()
}

/// Unwrap the SDK's optional `base64-` encoding
pub fn decode_cookie_value(raw: &str) -> Option<String> {
    let raw = raw.trim();
    match raw.strip_prefix(BASE64_PREFIX) {
        Some(encoded) => {
            let bytes = URL_SAFE_NO_PAD
                .decode(encoded.trim_end_matches('='))
                .ok()?;
            String::from_utf8(bytes).ok()
        }
        None => Some(raw.to_string()),
    }
}

pub fn encode_cookie_value(value: &str) -> String {
    format!("{}{}", BASE64_PREFIX, URL_SAFE_NO_PAD.encode(value))
}

/// Decode a stored code verifier. The SDK JSON-encodes the verifier string.
pub fn decode_code_verifier(raw: &str) -> Option<String> {
    let decoded = decode_cookie_value(raw)?;
    let verifier = serde_json::from_str::<String>(&decoded).unwrap_or(decoded);
    if verifier.is_empty() {
        None
    } else {
        Some(verifier)
    }
}
