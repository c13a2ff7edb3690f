//! Clash of Clans API client
//!
//! Thin wrapper around the upstream REST API. Replies carry the HTTP
//! status and any transport error as independent signals: a well-formed
//! error response (status >= 400, no transport error) and a transport
//! failure with no response at all are both expected cases, and callers
//! must check both.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(8);

/// Upstream transport-level errors
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Raw reply from the upstream API.
///
/// `status` is 0 when no response was obtained. `error` and `status`
/// are orthogonal: a reply can carry an error status without a
/// transport error, and a body read can fail after a status arrived.
#[derive(Debug, Clone, Default)]
pub struct RawReply {
    pub body: Vec<u8>,
    pub status: u16,
    pub error: Option<UpstreamError>,
}

impl RawReply {
    /// A reply for a request that never produced a response.
    pub fn failure(error: UpstreamError) -> Self {
        Self {
            body: Vec::new(),
            status: 0,
            error: Some(error),
        }
    }

    /// True when there was no transport error and the status is below 400.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status < 400
    }
}

/// Source of individual player data
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Fetch a player's raw payload by normalized tag.
    async fn player_raw(&self, tag: &str) -> RawReply;
}

/// Source of clan member listings
#[async_trait]
pub trait ClanSource: Send + Sync {
    /// Fetch a clan's raw member list by normalized tag.
    async fn clan_members_raw(&self, tag: &str) -> RawReply;
}

/// HTTP client for the Clash of Clans API
pub struct CocClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl CocClient {
    pub fn new(base_url: &str, token: &str) -> orecost_common::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(|e| orecost_common::Error::Internal(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http,
        })
    }

    async fn get_raw(&self, path: &str) -> RawReply {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "querying upstream API");

        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return RawReply::failure(UpstreamError::Transport(e.to_string())),
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => RawReply {
                body: body.to_vec(),
                status,
                error: None,
            },
            Err(e) => RawReply {
                body: Vec::new(),
                status,
                error: Some(UpstreamError::Body(e.to_string())),
            },
        }
    }
}

#[async_trait]
impl PlayerSource for CocClient {
    async fn player_raw(&self, tag: &str) -> RawReply {
        self.get_raw(&format!("/players/{tag}")).await
    }
}

#[async_trait]
impl ClanSource for CocClient {
    async fn clan_members_raw(&self, tag: &str) -> RawReply {
        self.get_raw(&format!("/clans/{tag}/members")).await
    }
}
