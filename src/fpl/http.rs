//! HTTP client for the public FPL API.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::fpl::types::{BootstrapStatic, EntryPicks, EventLive, Fixture, PlayerSummary};
use crate::{EntryId, Gameweek, PlayerId, Result};


/// Base path for the FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Environment variable that overrides [`FPL_BASE_URL`].
pub const API_BASE_ENV_VAR: &str = "FPL_API_BASE";

/// Thin typed wrapper over the FPL endpoints the planner reads.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Client against `FPL_API_BASE` if set, the public API otherwise.
    pub fn new() -> Self {
        let base = std::env::var(API_BASE_ENV_VAR).unwrap_or_else(|_| FPL_BASE_URL.to_string());
        Self::with_base_url(base)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(USER_AGENT, HeaderValue::from_static("fpl-planner"));
        h
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .headers(Self::default_headers())
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.get_json("bootstrap-static/").await
    }

    pub async fn fixtures(&self) -> Result<Vec<Fixture>> {
        self.get_json("fixtures/").await
    }

    pub async fn entry_picks(&self, entry: EntryId, gw: Gameweek) -> Result<EntryPicks> {
        self.get_json(&format!("entry/{}/event/{}/picks/", entry, gw))
            .await
    }

    pub async fn event_live(&self, gw: Gameweek) -> Result<EventLive> {
        self.get_json(&format!("event/{}/live/", gw)).await
    }

    pub async fn element_summary(&self, player: PlayerId) -> Result<PlayerSummary> {
        self.get_json(&format!("element-summary/{}/", player)).await
    }
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}
