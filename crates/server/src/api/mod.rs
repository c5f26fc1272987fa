//! HTTP surface

pub mod auth_handlers;
pub mod blog_handlers;
pub mod pages;
pub mod server;
pub mod worksheet_handlers;

pub use server::{AppState, build_api_router, run_api};
