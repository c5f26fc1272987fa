//! Process shutdown signal
//!
//! Ctrl-C cancels the shared token the HTTP server drains on.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancel `shutdown` on Ctrl-C. The watcher also ends, without cancelling,
/// once something else cancels the token.
pub fn cancel_on_ctrl_c(shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown.cancelled() => {}
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => tracing::info!("received ctrl-c, shutting down"),
                    Err(err) => tracing::warn!("ctrl-c handler failed, shutting down: {}", err),
                }
                shutdown.cancel();
            }
        }
    })
}
