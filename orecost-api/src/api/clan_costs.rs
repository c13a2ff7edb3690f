//! Clan aggregation endpoint

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use orecost_common::tags::normalize_tag;

use super::ApiError;
use crate::catalog::CatalogReader;
use crate::usecases::clan_costs::{clan_equipment_costs, ClanEquipmentCosts};
use crate::AppState;

/// Longer than the per-player deadline so the fan-out can drain even
/// when some members run up against their own timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GET /v1/clans/:tag/hero-equipments/costs
pub async fn get_clan_costs(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<ClanEquipmentCosts>, ApiError> {
    if tag.trim().is_empty() {
        return Err(ApiError::MissingTag);
    }
    let tag = normalize_tag(&tag);
    let catalog: Arc<dyn CatalogReader> = state.catalog.clone();

    let result = tokio::time::timeout(
        REQUEST_TIMEOUT,
        clan_equipment_costs(
            state.clans.as_ref(),
            Arc::clone(&state.players),
            catalog,
            &tag,
        ),
    )
    .await
    .map_err(|_| ApiError::Upstream {
        status: 502,
        message: "upstream request timed out".to_string(),
    })??;

    Ok(Json(result))
}
