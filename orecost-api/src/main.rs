//! orecost-api - hero equipment ore cost service
//!
//! Serves per-player and clan-wide ore expenditure reports computed
//! from the Clash of Clans API and a local equipment catalog.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use orecost_api::catalog::EquipmentCatalog;
use orecost_api::coc::CocClient;
use orecost_api::{build_router, AppState};
use orecost_common::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting OreCost API (orecost-api) v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    // The upstream API is allowlist-based; operators need the outbound IP.
    match fetch_public_ip().await {
        Some(ip) => info!("public outbound IP (for allowlist): {ip}"),
        None => info!("public outbound IP not detected (network may block metadata services)"),
    }

    let catalog = match EquipmentCatalog::load(&config.catalog_path) {
        Ok(catalog) => {
            info!(
                "✓ Loaded equipment catalog ({} items) from {}",
                catalog.items.len(),
                config.catalog_path.display()
            );
            catalog
        }
        Err(e) => {
            warn!(
                "failed to load catalog at {}: {e}; all equipment will be unknown",
                config.catalog_path.display()
            );
            EquipmentCatalog::default()
        }
    };

    let client = Arc::new(CocClient::new(&config.api_base, &config.api_token)?);
    let state = AppState::new(
        Arc::new(catalog),
        client.clone(),
        client,
        config.public_url.clone(),
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    info!("orecost-api listening on http://{}", config.server_addr);
    info!("API docs: http://{}/docs", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Best-effort detection of the public outbound IP.
///
/// Tries a few well-known echo services with a short deadline each;
/// any failure just moves on to the next.
async fn fetch_public_ip() -> Option<String> {
    const ENDPOINTS: [&str; 3] = [
        "https://api.ipify.org",
        "https://ifconfig.me",
        "https://icanhazip.com",
    ];

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .ok()?;

    for url in ENDPOINTS {
        let Ok(response) = client.get(url).send().await else {
            continue;
        };
        if response.status().as_u16() >= 400 {
            continue;
        }
        let Ok(text) = response.text().await else {
            continue;
        };
        let ip = text.trim();
        if !ip.is_empty() {
            return Some(ip.to_string());
        }
    }
    None
}
