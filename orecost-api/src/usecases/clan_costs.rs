//! Clan-wide ore cost aggregation
//!
//! Fans the per-player fetch-and-score step out across all clan members
//! under a bounded worker cap. The clan member list is a hard dependency;
//! any individual member's fetch is not. A member whose fetch errors,
//! times out, or returns an error status keeps a zero-valued entry, so
//! the response always has exactly one entry per listed member.

use std::sync::Arc;
use std::time::Duration;

use orecost_common::tags::normalize_tag;
use orecost_common::OreTotals;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use super::spend::compute_spend;
use super::UseCaseError;
use crate::catalog::CatalogReader;
use crate::coc::{ClanSource, PlayerSource};

/// Upper bound on concurrently running player fetches, independent of
/// clan size. Bounds outbound load on the upstream API.
const WORKER_LIMIT: usize = 5;

/// Deadline for each individual player fetch. Shorter than the overall
/// request deadline so one slow member cannot exhaust it.
const PLAYER_FETCH_TIMEOUT: Duration = Duration::from_secs(6);

/// One clan member's aggregated spend
#[derive(Debug, Clone, Serialize)]
pub struct ClanMemberSpend {
    pub tag: String,
    pub name: String,
    pub spent: OreTotals,
}

/// Aggregated clan result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanEquipmentCosts {
    pub clan_tag: String,
    pub total: OreTotals,
    pub members: Vec<ClanMemberSpend>,
}

#[derive(Debug, Default, Deserialize)]
struct MemberList {
    #[serde(default)]
    items: Vec<MemberRef>,
}

#[derive(Debug, Deserialize)]
struct MemberRef {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    name: String,
}

/// Aggregate ore spend across all members of a clan.
pub async fn clan_equipment_costs(
    clans: &dyn ClanSource,
    players: Arc<dyn PlayerSource>,
    catalog: Arc<dyn CatalogReader>,
    clan_tag: &str,
) -> Result<ClanEquipmentCosts, UseCaseError> {
    let reply = clans.clan_members_raw(clan_tag).await;
    if !reply.is_success() {
        return Err(UseCaseError::from_reply(reply));
    }
    let list: MemberList = serde_json::from_slice(&reply.body)?;

    // One pre-allocated slot per member, indexed by list position. Each
    // task owns exactly one index, fixed before dispatch, so slot writes
    // need no synchronization and completion order cannot affect
    // member identity. The zero value doubles as the soft-failure result.
    let mut results: Vec<ClanMemberSpend> = list
        .items
        .iter()
        .map(|member| ClanMemberSpend {
            tag: member.tag.clone(),
            name: member.name.clone(),
            spent: OreTotals::ZERO,
        })
        .collect();

    let semaphore = Arc::new(Semaphore::new(WORKER_LIMIT));
    let mut tasks: JoinSet<(usize, OreTotals)> = JoinSet::new();

    for (index, member) in list.items.iter().enumerate() {
        let players = Arc::clone(&players);
        let catalog = Arc::clone(&catalog);
        let semaphore = Arc::clone(&semaphore);
        let tag = normalize_tag(&member.tag);

        // Dropping the JoinSet (request cancelled) aborts all in-flight
        // child fetches.
        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore closed while tasks pending");

            let spent = match tokio::time::timeout(PLAYER_FETCH_TIMEOUT, players.player_raw(&tag))
                .await
            {
                Ok(reply) if reply.is_success() => compute_spend(&reply.body, catalog.as_ref()).0,
                Ok(reply) => {
                    debug!(tag = %tag, status = reply.status, "player fetch failed, counting zero");
                    OreTotals::ZERO
                }
                Err(_) => {
                    debug!(tag = %tag, "player fetch timed out, counting zero");
                    OreTotals::ZERO
                }
            };
            (index, spent)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        // A panicked task leaves that member's zero value in place.
        if let Ok((index, spent)) = joined {
            results[index].spent = spent;
        }
    }

    // Stable sort: descending shiny, then glowy, then starry. Full ties
    // keep the member-list order.
    results.sort_by(|a, b| {
        b.spent
            .shiny
            .cmp(&a.spent.shiny)
            .then(b.spent.glowy.cmp(&a.spent.glowy))
            .then(b.spent.starry.cmp(&a.spent.starry))
    });

    let mut total = OreTotals::ZERO;
    for member in &results {
        total += member.spent;
    }

    Ok(ClanEquipmentCosts {
        clan_tag: clan_tag.to_string(),
        total,
        members: results,
    })
}
