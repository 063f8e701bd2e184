use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::payload::decode_list;
use super::retry::RetryPolicy;
use crate::domain::models::{ApiConfig, CalendarEvent, ShiftDefinition};
use crate::domain::ports::{
    EventQuery, EventSource, ShiftQuery, ShiftSource, SourceError, SourceResult,
};

/// REST client for the shift-list and calendar endpoints
///
/// Features:
/// - Bearer token authentication when configured
/// - Per-request timeout
/// - Exponential backoff retry for transient errors (network, 408, 429, 5xx)
pub struct ApiClient {
    http_client: ReqwestClient,
    shifts_url: Url,
    events_url: Url,
    token: Option<String>,
    retry_policy: RetryPolicy,
}

impl ApiClient {
    /// Create a client from the `api` section of the configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            shifts_url: endpoint(&config.base_url, &config.shifts_path)?,
            events_url: endpoint(&config.base_url, &config.events_path)?,
            token: config.token.clone(),
            retry_policy: RetryPolicy::new(
                config.max_retries,
                config.initial_backoff_ms,
                config.max_backoff_ms,
            ),
        })
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn shifts_url(&self) -> &Url {
        &self.shifts_url
    }

    pub fn events_url(&self) -> &Url {
        &self.events_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send one GET and decode a list payload
    async fn get_list<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        query: &[(&str, String)],
    ) -> SourceResult<Vec<T>> {
        let request = self
            .authorize(self.http_client.get(url.clone()))
            .header("accept", "application/json")
            .query(query);

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let items = decode_list(&body)?;
        Ok(items)
    }
}

/// Join base URL and endpoint path, tolerating slashes on either side
fn endpoint(base_url: &str, path: &str) -> Result<Url, SourceError> {
    let joined = format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|_| SourceError::InvalidUrl(joined))
}

#[async_trait]
impl ShiftSource for ApiClient {
    #[instrument(skip(self), fields(url = %self.shifts_url))]
    async fn fetch_shifts(&self, query: &ShiftQuery) -> SourceResult<Vec<ShiftDefinition>> {
        let params: Vec<(&str, String)> = query
            .user_id
            .iter()
            .map(|id| ("user_id", id.to_string()))
            .collect();

        let shifts: Vec<ShiftDefinition> = self
            .retry_policy
            .execute(|| self.get_list(&self.shifts_url, &params))
            .await?;

        debug!(count = shifts.len(), "fetched shift definitions");
        Ok(shifts)
    }
}

#[async_trait]
impl EventSource for ApiClient {
    #[instrument(skip(self), fields(url = %self.events_url))]
    async fn fetch_events(&self, query: &EventQuery) -> SourceResult<Vec<CalendarEvent>> {
        let mut params = vec![
            ("from", query.from.format("%Y-%m-%d").to_string()),
            ("to", query.to.format("%Y-%m-%d").to_string()),
        ];
        if let Some(ref user_id) = query.user_id {
            params.push(("user_id", user_id.to_string()));
        }

        let events: Vec<CalendarEvent> = self
            .retry_policy
            .execute(|| self.get_list(&self.events_url, &params))
            .await?;

        debug!(count = events.len(), "fetched calendar events");
        Ok(events)
    }
}
