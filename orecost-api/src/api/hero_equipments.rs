//! Player equipment availability endpoint

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use orecost_common::tags::normalize_tag;

use super::ApiError;
use crate::usecases::hero_equipments::{player_hero_equipments, PlayerHeroEquipments};
use crate::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// GET /v1/players/:tag/hero-equipments
pub async fn get_hero_equipments(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<PlayerHeroEquipments>, ApiError> {
    if tag.trim().is_empty() {
        return Err(ApiError::MissingTag);
    }
    let tag = normalize_tag(&tag);

    let result = tokio::time::timeout(
        REQUEST_TIMEOUT,
        player_hero_equipments(state.players.as_ref(), state.catalog.as_ref(), &tag),
    )
    .await
    .map_err(|_| ApiError::Upstream {
        status: 502,
        message: "upstream request timed out".to_string(),
    })??;

    Ok(Json(result))
}
