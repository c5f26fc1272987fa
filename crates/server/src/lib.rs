//! Makos.ai web server library

pub mod analytics;
pub mod api;
pub mod auth;
pub mod config;
pub mod content;
pub mod layout;
pub mod shutdown;
pub mod validation;
pub mod worksheet;
