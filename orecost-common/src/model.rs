//! Shared domain model types

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Aggregate ore expenditure across the three ore kinds.
///
/// Counters are unsigned: per-level costs are non-negative and levels are
/// clamped before indexing, so totals can never go below zero. The zero
/// value is the additive identity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreTotals {
    pub shiny: u64,
    pub glowy: u64,
    pub starry: u64,
}

impl OreTotals {
    pub const ZERO: OreTotals = OreTotals {
        shiny: 0,
        glowy: 0,
        starry: 0,
    };
}

impl AddAssign for OreTotals {
    fn add_assign(&mut self, rhs: OreTotals) {
        self.shiny += rhs.shiny;
        self.glowy += rhs.glowy;
        self.starry += rhs.starry;
    }
}
