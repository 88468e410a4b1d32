use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::customer::store::seaorm::SeaOrmCustomerStore;
use service::customer::CustomerService;
use service::mobile::HttpMobileValidator;

use crate::routes::{self, ServerState};

fn load_config() -> anyhow::Result<configs::AppConfig> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            // No config file is fine as long as the env vars cover the gaps.
            warn!(error = %e, "config file not loaded, falling back to env");
            configs::AppConfig::default()
        }
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the store and validator, bind the listener and serve until the
/// process is told to stop.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .context("connecting to database")?;
    let store = Arc::new(SeaOrmCustomerStore { db });
    let validator = Arc::new(HttpMobileValidator::new(
        cfg.mobile_validator.url.clone(),
        Duration::from_secs(cfg.mobile_validator.timeout_secs),
    )?);
    let service = Arc::new(CustomerService::new(store, validator));

    let app = routes::build_router(build_cors(), ServerState { service });

    let bind = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "customer service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
