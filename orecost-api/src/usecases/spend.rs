//! Ore spend computation
//!
//! Cost tables store per-level incremental costs, so an item's total
//! spend is the cumulative table sum from level 0 through its current
//! level. Levels outside the table are clamped: the upstream sometimes
//! reports negative levels for malformed data, and tables cap the
//! maximum representable level.

use orecost_common::names::extract_name;
use orecost_common::OreTotals;
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::CatalogReader;

/// One equipment entry of a player payload, as received upstream.
///
/// The name may be a plain string or a localized-name object; it is kept
/// raw here and resolved during computation. `max_level` is carried for
/// the availability report but plays no part in cost computation.
#[derive(Debug, Deserialize)]
pub(crate) struct EquipmentLevel {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub level: i64,
    #[serde(default, rename = "maxLevel")]
    pub max_level: i64,
}

/// The subset of the upstream player schema the service reads.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerPayload {
    #[serde(default, rename = "heroEquipment")]
    pub hero_equipment: Vec<EquipmentLevel>,
}

pub(crate) fn parse_player_payload(body: &[u8]) -> Result<PlayerPayload, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Per-equipment spend breakdown entry
#[derive(Debug, Clone, serde::Serialize)]
pub struct EquipmentSpend {
    pub name: String,
    pub rarity: String,
    /// Raw level as reported upstream, before clamping
    pub level: i64,
    pub spent: OreTotals,
}

/// Compute a player's ore spend from a raw payload.
///
/// A structurally unparseable payload contributes zero rather than
/// failing; callers that treat malformed data as a hard error parse
/// with [`parse_player_payload`] first.
pub fn compute_spend(body: &[u8], catalog: &dyn CatalogReader) -> (OreTotals, Vec<EquipmentSpend>) {
    match parse_player_payload(body) {
        Ok(payload) => spend_from_payload(&payload, catalog),
        Err(_) => (OreTotals::ZERO, Vec::new()),
    }
}

/// Score each equipment entry against the catalog and accumulate totals.
///
/// Entries are silently skipped when the name is empty, the rarity is
/// unknown to the catalog, or the rarity has no cost table. Unknown
/// equipment is deliberately not guessed at.
pub(crate) fn spend_from_payload(
    payload: &PlayerPayload,
    catalog: &dyn CatalogReader,
) -> (OreTotals, Vec<EquipmentSpend>) {
    let mut total = OreTotals::ZERO;
    let mut breakdown = Vec::with_capacity(payload.hero_equipment.len());

    for item in &payload.hero_equipment {
        let name = extract_name(&item.name);
        if name.is_empty() {
            continue;
        }
        let Some(rarity) = catalog.rarity_of(&name) else {
            continue;
        };
        let rarity = rarity.to_ascii_uppercase();
        let table = catalog.cost_table(&rarity);
        if table.is_empty() {
            continue;
        }

        let level = usize::try_from(item.level).unwrap_or(0);
        let level = level.min(table.len() - 1);

        let mut spent = OreTotals::ZERO;
        for cost in &table[..=level] {
            spent += OreTotals::from(*cost);
        }

        total += spent;
        breakdown.push(EquipmentSpend {
            name,
            rarity,
            level: item.level,
            spent,
        });
    }

    (total, breakdown)
}
