use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use makos_server::api::{AppState, run_api};
use makos_server::auth::{AuthConfig, SupabaseAuthClient};
use makos_server::config;
use makos_server::shutdown::cancel_on_ctrl_c;
use makos_server::worksheet::{
    AnthropicConfig, AnthropicGenerator, MockGenerator, WorksheetGenerator, anthropic::API_KEY_VAR,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::loader::load_with_discovery()?;
    config.validate().map_err(|e| anyhow!(e))?;

    let auth_config = AuthConfig::from_env().context("auth provider is not configured")?;
    let cookies = auth_config
        .cookie_names()
        .with_secure(config.server.is_secure_origin());
    tracing::info!("using auth provider at {}", auth_config.url);
    let auth_client = SupabaseAuthClient::new(auth_config)?;

    let worksheets: Arc<dyn WorksheetGenerator> = match AnthropicConfig::from_env(&config.worksheet) {
        Some(anthropic) => {
            let anthropic = anthropic?;
            tracing::info!("generating worksheets with {}", anthropic.model);
            Arc::new(AnthropicGenerator::new(anthropic)?)
        }
        None => {
            tracing::warn!("{} is not set, serving demo worksheets", API_KEY_VAR);
            Arc::new(MockGenerator::new())
        }
    };

    let state = Arc::new(
        AppState::new(config, Arc::new(auth_client), cookies).with_worksheet_generator(worksheets),
    );

    let shutdown = CancellationToken::new();
    let watcher = cancel_on_ctrl_c(shutdown.clone());
    let result = run_api(state, shutdown.clone()).await;
    shutdown.cancel();
    let _ = watcher.await;
    result
}
