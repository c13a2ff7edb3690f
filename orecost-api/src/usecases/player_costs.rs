//! Per-player ore cost report
//!
//! Unlike the clan aggregation, the player here *is* the request, so an
//! unreachable player or malformed payload is a hard failure.

use orecost_common::OreTotals;
use serde::Serialize;

use super::spend::{parse_player_payload, spend_from_payload, EquipmentSpend};
use super::UseCaseError;
use crate::catalog::CatalogReader;
use crate::coc::PlayerSource;

/// Per-player cost result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEquipmentCosts {
    pub player_tag: String,
    pub total: OreTotals,
    pub equipments: Vec<EquipmentSpend>,
}

/// Compute total and per-equipment ore spend for one player.
pub async fn player_equipment_costs(
    players: &dyn PlayerSource,
    catalog: &dyn CatalogReader,
    player_tag: &str,
) -> Result<PlayerEquipmentCosts, UseCaseError> {
    let reply = players.player_raw(player_tag).await;
    if !reply.is_success() {
        return Err(UseCaseError::from_reply(reply));
    }
    let payload = parse_player_payload(&reply.body)?;

    let (total, mut equipments) = spend_from_payload(&payload, catalog);
    equipments.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(PlayerEquipmentCosts {
        player_tag: player_tag.to_string(),
        total,
        equipments,
    })
}
