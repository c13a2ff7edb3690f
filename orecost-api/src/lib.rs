//! orecost-api library - hero equipment ore cost service
//!
//! Aggregates ore expenditure for players and whole clans from the
//! Clash of Clans API, scored against a local equipment catalog.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod coc;
pub mod usecases;

use catalog::EquipmentCatalog;
use coc::{ClanSource, PlayerSource};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Equipment catalog, read-only for the process lifetime
    pub catalog: Arc<EquipmentCatalog>,
    /// Upstream source for individual player data
    pub players: Arc<dyn PlayerSource>,
    /// Upstream source for clan member listings
    pub clans: Arc<dyn ClanSource>,
    /// Externally reachable base URL, injected into served API docs
    pub public_url: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        catalog: Arc<EquipmentCatalog>,
        players: Arc<dyn PlayerSource>,
        clans: Arc<dyn ClanSource>,
        public_url: Option<String>,
    ) -> Self {
        Self {
            catalog,
            players,
            clans,
            public_url,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/v1/players/:tag/hero-equipments/costs",
            get(api::get_player_costs),
        )
        .route(
            "/v1/players/:tag/hero-equipments",
            get(api::get_hero_equipments),
        )
        .route(
            "/v1/clans/:tag/hero-equipments/costs",
            get(api::get_clan_costs),
        )
        .merge(api::health_routes())
        .merge(api::docs_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
