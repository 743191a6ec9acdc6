//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, service wiring, and the Axum server lifecycle.

use crate::application::services::{AuthService, LinkService};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryLinkStore, RedisLinkStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::expiration::ExpirationPolicy;
use crate::utils::slug::RandomSlugGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store backend (Redis or in-memory, per `STORE_BACKEND`)
/// - Link and auth services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        Arc::new(RandomSlugGenerator),
        config.reserved_slug_set(),
        config.slug_max_attempts,
        ExpirationPolicy::new(config.preview_mode, config.preview_ttl_seconds),
    ));
    let auth_service = Arc::new(AuthService::new(&config.site_token));

    let state = AppState {
        link_service,
        auth_service,
        store,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Constructs the link store selected by the configuration.
async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Redis backend selected without a Redis URL"))?;

            let store = RedisLinkStore::connect(redis_url).await?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Store enabled (memory): entries will not survive a restart");
            Ok(Arc::new(MemoryLinkStore::new()))
        }
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
