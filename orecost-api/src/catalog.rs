//! Equipment catalog
//!
//! The catalog is loaded once at startup from a JSON file and is read-only
//! afterwards, so it can be shared across concurrent requests without
//! locking. It maps equipment names to rarities and holds the per-level
//! ore cost table for each rarity.

use orecost_common::{Error, OreTotals, Result};
use serde::Deserialize;
use std::path::Path;

/// Per-level incremental ore cost record
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OreCost {
    #[serde(default)]
    pub shiny: u64,
    #[serde(default)]
    pub glowy: u64,
    #[serde(default)]
    pub starry: u64,
}

impl From<OreCost> for OreTotals {
    fn from(cost: OreCost) -> Self {
        OreTotals {
            shiny: cost.shiny,
            glowy: cost.glowy,
            starry: cost.starry,
        }
    }
}

/// A catalog entry describing one piece of hero equipment
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    /// COMMON or EPIC
    #[serde(default)]
    pub rarity: String,
    /// Owning hero, e.g. BARBARIAN_KING
    #[serde(default)]
    pub hero: String,
    /// Stable sortable identifier
    #[serde(default)]
    pub id: i64,
}

/// The full equipment catalog as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentCatalog {
    #[serde(default)]
    pub items: Vec<EquipmentEntry>,
    #[serde(default)]
    pub common_costs_per_level: Vec<OreCost>,
    #[serde(default)]
    pub epic_costs_per_level: Vec<OreCost>,
}

impl EquipmentCatalog {
    /// Load and validate the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)?;
        let catalog: EquipmentCatalog = serde_json::from_slice(&raw)
            .map_err(|e| Error::Config(format!("invalid catalog file {}: {e}", path.display())))?;
        if catalog.items.iter().any(|item| item.name.is_empty()) {
            return Err(Error::Config(format!(
                "catalog item missing name in {}",
                path.display()
            )));
        }
        Ok(catalog)
    }
}

/// Read-only access to equipment classification and cost tables.
///
/// Implemented by [`EquipmentCatalog`] in production and by stubs in tests.
pub trait CatalogReader: Send + Sync {
    /// Rarity for the given equipment name, or `None` when the name is
    /// not in the catalog. Matching is case-insensitive.
    fn rarity_of(&self, name: &str) -> Option<&str>;

    /// Per-level cost table for a rarity. Unknown rarities yield an
    /// empty table.
    fn cost_table(&self, rarity: &str) -> &[OreCost];

    /// All equipment names known to the catalog.
    fn equipment_names(&self) -> Vec<&str>;
}

impl CatalogReader for EquipmentCatalog {
    fn rarity_of(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .map(|item| item.rarity.as_str())
    }

    fn cost_table(&self, rarity: &str) -> &[OreCost] {
        if rarity.eq_ignore_ascii_case("COMMON") {
            &self.common_costs_per_level
        } else if rarity.eq_ignore_ascii_case("EPIC") {
            &self.epic_costs_per_level
        } else {
            &[]
        }
    }

    fn equipment_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}
