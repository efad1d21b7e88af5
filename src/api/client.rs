// HTTP client for the league API.
//
// Thin GET-and-decode wrapper around reqwest: no retry, no caching. The
// base URL and timeout come from the startup config; a dead server
// surfaces as a `Network` error instead of an indefinite loading state.
//
// The `ApiBackend` trait is the seam the orchestrator fetches through;
// tests substitute a scripted double.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ApiConfig;
use crate::model::{Owner, Player, RunsEntry, StaffMember, Team, WicketsEntry};

use super::query::PlayerQuery;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent, the connection failed, or it timed out.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    /// The body was not valid JSON for the expected shape.
    #[error("invalid response body for {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

// ---------------------------------------------------------------------------
// Backend trait
// ---------------------------------------------------------------------------

/// The fetch operations the orchestrator performs, one per API endpoint.
#[async_trait]
pub trait ApiBackend: Send + Sync + 'static {
    async fn teams(&self) -> Result<Vec<Team>, ApiError>;
    async fn team(&self, team_id: &str) -> Result<Team, ApiError>;
    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, ApiError>;
    async fn player(&self, player_id: &str) -> Result<Player, ApiError>;
    async fn staff(&self, team_id: Option<&str>) -> Result<Vec<StaffMember>, ApiError>;
    async fn owners(&self, team_id: Option<&str>) -> Result<Vec<Owner>, ApiError>;
    async fn top_runs(&self) -> Result<Vec<RunsEntry>, ApiError>;
    async fn top_wickets(&self) -> Result<Vec<WicketsEntry>, ApiError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Real client talking to the configured base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the startup config. Fails only if the underlying
    /// TLS/connector setup fails.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` (with optional query parameters) and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, params = params.len(), "GET");

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ApiBackend for ApiClient {
    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_json("/api/teams", &[]).await
    }

    async fn team(&self, team_id: &str) -> Result<Team, ApiError> {
        self.get_json(&format!("/api/teams/{team_id}"), &[]).await
    }

    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, ApiError> {
        self.get_json("/api/players", &query.params()).await
    }

    async fn player(&self, player_id: &str) -> Result<Player, ApiError> {
        self.get_json(&format!("/api/players/{player_id}"), &[])
            .await
    }

    async fn staff(&self, team_id: Option<&str>) -> Result<Vec<StaffMember>, ApiError> {
        self.get_json("/api/staff", &team_params(team_id)).await
    }

    async fn owners(&self, team_id: Option<&str>) -> Result<Vec<Owner>, ApiError> {
        self.get_json("/api/owners", &team_params(team_id)).await
    }

    async fn top_runs(&self) -> Result<Vec<RunsEntry>, ApiError> {
        self.get_json("/api/stats/top-runs", &[]).await
    }

    async fn top_wickets(&self) -> Result<Vec<WicketsEntry>, ApiError> {
        self.get_json("/api/stats/top-wickets", &[]).await
    }
}

/// The optional `team=` parameter shared by the staff and owners endpoints.
fn team_params(team_id: Option<&str>) -> Vec<(&'static str, String)> {
    match team_id {
        Some(id) if !id.is_empty() => vec![("team", id.to_string())],
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
