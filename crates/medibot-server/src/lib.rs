//! # medibot-server
//!
//! HTTP custom-action webhook for MEDIBOT.
//!
//! The conversational framework POSTs an action call to `/webhook`; the
//! server routes it through an [`ActionRegistry`](medibot_core::ActionRegistry)
//! holding `action_provide_disease_info` and returns the collected replies.
//!
//! ```rust,ignore
//! let config = ServerConfig::from_file(Path::new("medibot.toml"))?;
//! medibot_server::serve(config).await?;
//! ```

pub mod config;
pub mod routes;

use std::sync::Arc;

use tracing::info;

use medibot_contracts::error::{MedibotError, MedibotResult};

pub use config::ServerConfig;
pub use routes::build_app;

/// Load the knowledge table, bind, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> MedibotResult<()> {
    config.validate()?;
    let table = config.load_table()?;
    let diseases = table.len();
    let registry = Arc::new(medibot_core::default_registry(table));
    let app = build_app(registry);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| MedibotError::Io {
            reason: format!("failed to bind {}: {}", config.bind_addr(), e),
        })?;
    let local_addr = listener.local_addr().map_err(|e| MedibotError::Io {
        reason: e.to_string(),
    })?;

    info!(addr = %local_addr, diseases, "action server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MedibotError::Io {
            reason: format!("server error: {}", e),
        })?;

    info!("action server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
