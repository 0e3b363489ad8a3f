use std::net::SocketAddr;

use axum::Router;
use common::env::ensure_media_root;
use configs::AppConfig;
use service::media::MediaUrls;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, RouterOptions};
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    ensure_media_root(&cfg.media.root)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_and_migrate(&cfg.database).await?;

    let mut state = ServerState::new(db, MediaUrls::new(cfg.media.url_prefix.clone()));
    state.expose_internal_errors = cfg.server.expose_internal_errors;

    let opts = RouterOptions { media_root: cfg.media.root.clone(), enable_admin: cfg.server.enable_admin };
    if opts.enable_admin {
        info!("admin routes mounted under /admin");
    }
    Ok(routes::build_router(state, &opts, build_cors()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
