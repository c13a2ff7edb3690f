//! Application use cases
//!
//! Each use case is a free async function over the upstream source and
//! catalog traits, so handlers pass the real client and tests pass stubs.

pub mod clan_costs;
pub mod hero_equipments;
pub mod player_costs;
pub mod spend;

use crate::coc::UpstreamError;
use thiserror::Error;

/// Hard failures that abort a whole request.
///
/// Soft per-member failures never appear here; they are absorbed into
/// zero-valued member records by the clan aggregation.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The upstream dependency failed. `status` is the upstream HTTP
    /// status when one was obtained, 0 otherwise.
    #[error("upstream request failed with status {status}")]
    Upstream {
        status: u16,
        source: Option<UpstreamError>,
    },

    /// A payload this request depends on was structurally unparseable.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The supplied tag cannot be forwarded upstream.
    #[error("invalid tag: {0}")]
    InvalidTag(String),
}

impl UseCaseError {
    /// Build the hard-failure variant from a raw upstream reply.
    pub(crate) fn from_reply(reply: crate::coc::RawReply) -> Self {
        UseCaseError::Upstream {
            status: reply.status,
            source: reply.error,
        }
    }
}
