//! Player equipment availability report
//!
//! Lists which catalog equipment a player owns and which they have not
//! unlocked yet. Shares the player payload parsing with the cost engine
//! but performs no cost computation.

use std::collections::HashSet;

use orecost_common::names::extract_name;
use orecost_common::tags::percent_ok;
use serde::Serialize;

use super::spend::parse_player_payload;
use super::UseCaseError;
use crate::catalog::CatalogReader;
use crate::coc::PlayerSource;

/// One equipment line of the availability report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroEquipment {
    pub name: String,
    pub level: i64,
    pub max_level: i64,
    pub available: bool,
}

/// Availability report for one player
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHeroEquipments {
    pub player_tag: String,
    pub available: Vec<HeroEquipment>,
    pub unavailable: Vec<HeroEquipment>,
}

/// Split the catalog into equipment the player owns and equipment they
/// have not unlocked.
pub async fn player_hero_equipments(
    players: &dyn PlayerSource,
    catalog: &dyn CatalogReader,
    player_tag: &str,
) -> Result<PlayerHeroEquipments, UseCaseError> {
    if !percent_ok(player_tag) {
        return Err(UseCaseError::InvalidTag(player_tag.to_string()));
    }

    let reply = players.player_raw(player_tag).await;
    if !reply.is_success() {
        return Err(UseCaseError::from_reply(reply));
    }
    let payload = parse_player_payload(&reply.body)?;

    let mut available = Vec::with_capacity(payload.hero_equipment.len());
    let mut seen: HashSet<String> = HashSet::new();
    for item in &payload.hero_equipment {
        let name = extract_name(&item.name);
        if name.is_empty() {
            continue;
        }
        seen.insert(name.clone());
        available.push(HeroEquipment {
            name,
            level: item.level,
            max_level: item.max_level,
            available: true,
        });
    }

    // Catalog-only names are considered not yet unlocked.
    let mut unavailable: Vec<HeroEquipment> = catalog
        .equipment_names()
        .into_iter()
        .filter(|name| !seen.contains(*name))
        .map(|name| HeroEquipment {
            name: name.to_string(),
            level: 0,
            max_level: 0,
            available: false,
        })
        .collect();

    available.sort_by(|a, b| a.name.cmp(&b.name));
    unavailable.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(PlayerHeroEquipments {
        player_tag: player_tag.to_string(),
        available,
        unavailable,
    })
}
