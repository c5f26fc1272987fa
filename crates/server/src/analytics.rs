//! Google Ads conversion tracking
//!
//! Events are pushed onto a [`TagQueue`], which stands in for the page's
//! `gtag` function. Without a queue (no tag library on the page) tracking is
//! a silent no-op.
//!
//! Conversions that happen on a redirect are parked in a short-lived cookie
//! and fired by the next rendered page.

use std::sync::Mutex;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

pub const GA_ADS_ID: &str = "AW-778442301";

pub mod conversion_ids {
    pub const SIGN_UP: &str = "AW-778442301/EhjuCIqUoPAbEL2smPMC";
    pub const PURCHASE: &str = "AW-778442301/QKNICOGmoPAbEL2smPMC";
}

/// Parameters of a `gtag('event', 'conversion', ...)` call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConversionEvent {
    pub send_to: String,
    pub value: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Destination for conversion events
pub trait TagQueue: Send + Sync {
    fn push_conversion(&self, event: ConversionEvent);
}

pub fn track_sign_up(tag: Option<&dyn TagQueue>) {
    let Some(tag) = tag else {
        return;
    };

    tag.push_conversion(ConversionEvent {
        send_to: conversion_ids::SIGN_UP.to_string(),
        value: 1.0,
        currency: "TRY".to_string(),
        transaction_id: None,
    });
    tracing::debug!("sign up conversion tracked");
}

pub fn track_purchase(tag: Option<&dyn TagQueue>, value: Option<f64>, transaction_id: Option<&str>) {
    let Some(tag) = tag else {
        return;
    };

    let value = value.unwrap_or(1.0);
    tag.push_conversion(ConversionEvent {
        send_to: conversion_ids::PURCHASE.to_string(),
        value,
        currency: "USD".to_string(),
        transaction_id: Some(transaction_id.unwrap_or_default().to_string()),
    });
    tracing::debug!(value, ?transaction_id, "purchase conversion tracked");
}

pub const CONVERSION_COOKIE: &str = "makos_conversion";

const CONVERSION_COOKIE_MAX_AGE_SECS: i64 = 300;

/// A conversion waiting for the next page render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConversion {
    SignUp,
}

impl PendingConversion {
    fn as_str(self) -> &'static str {
        match self {
            PendingConversion::SignUp => "sign_up",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "sign_up" => Some(PendingConversion::SignUp),
            _ => None,
        }
    }

    pub fn track(self, tag: Option<&dyn TagQueue>) {
        match self {
            PendingConversion::SignUp => track_sign_up(tag),
        }
    }
}

pub fn queue_conversion(jar: CookieJar, conversion: PendingConversion, secure: bool) -> CookieJar {
    jar.add(
        Cookie::build((CONVERSION_COOKIE, conversion.as_str()))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(CONVERSION_COOKIE_MAX_AGE_SECS)),
    )
}

/// Remove the parked conversion, if any, so it fires exactly once
pub fn take_conversion(jar: CookieJar) -> (CookieJar, Option<PendingConversion>) {
    let Some(value) = jar.get(CONVERSION_COOKIE).map(|cookie| cookie.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build((CONVERSION_COOKIE, "")).path("/"));
    (jar, PendingConversion::parse(&value))
}

/// Collects events for a single rendered page
#[derive(Debug, Default)]
pub struct PageTagQueue {
    events: Mutex<Vec<ConversionEvent>>,
}

impl PageTagQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Render queued events as inline `gtag` calls
    pub fn render_script(&self) -> String {
        self.events()
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .map(|params| {
                format!(
                    "gtag('event', 'conversion', {});\n",
                    params.replace("</", "<\\/")
                )
            })
            .collect()
    }
}

impl TagQueue for PageTagQueue {
    fn push_conversion(&self, event: ConversionEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(err) => tracing::warn!("dropping conversion event: {}", err),
        }
    }
}
