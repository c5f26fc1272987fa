use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth_handlers::{callback_handle_handler, callback_redirect_handler};
use super::blog_handlers::{blog_index_handler, blog_post_handler, list_posts_handler, get_post_handler};
use super::pages::{home_handler, login_handler};
use super::worksheet_handlers::generate_worksheet_handler;
use crate::auth::{AuthClient, CookieNames};
use crate::config::Config;
use crate::worksheet::{MockGenerator, WorksheetGenerator};

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub config: Config,
    pub auth_client: Arc<dyn AuthClient>,
    pub cookies: CookieNames,
    pub worksheets: Arc<dyn WorksheetGenerator>,
}

impl AppState {
    /// State with the offline worksheet generator
    pub fn new(config: Config, auth_client: Arc<dyn AuthClient>, cookies: CookieNames) -> Self {
        Self {
            config,
            auth_client,
            cookies,
            worksheets: Arc::new(MockGenerator::new()),
        }
    }

    pub fn with_worksheet_generator(mut self, worksheets: Arc<dyn WorksheetGenerator>) -> Self {
        self.worksheets = worksheets;
        self
    }
}

pub fn build_api_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/blog", get(list_posts_handler))
        .route("/api/blog/{slug}", get(get_post_handler))
        .route("/api/worksheets", post(generate_worksheet_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        );

    Router::new()
        .route("/", get(home_handler))
        .route("/login", get(login_handler))
        .route("/auth/callback", get(callback_redirect_handler))
        .route("/auth/callback/handle", get(callback_handle_handler))
        .route("/blog", get(blog_index_handler))
        .route("/blog/{slug}", get(blog_post_handler))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api(state: Arc<AppState>, shutdown: CancellationToken) -> Result<()> {
    let bind_addr = state.config.server.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("listening on {}", bind_addr);

    axum::serve(listener, build_api_router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    Ok(())
}
