//! HTTP client for the CMS content API.
//!
//! Thin ureq-based implementation of [`ContentFetcher`]. Requests are
//! blocking at the transport level and are moved off the async runtime
//! with `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use pagecast_sitemap::{RouteId, RouteNode};

use crate::error::ApiError;
use crate::fetcher::{ArchiveQuery, ContentFetcher};
use crate::model::ContentModel;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// CMS content API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CmsClient {
    agent: Agent,
    base_url: String,
}

impl CmsClient {
    /// Create a client for the given API base URL (e.g. `https://host/api/cms`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with an explicit global request timeout.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Issue a GET against `<base>/<kind>` and deserialize the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        kind: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{kind}", self.base_url);

        debug!(%url, params = pairs.len(), "CMS API request");

        let mut request = self.agent.get(&url).header("Accept", "application/json");
        for (key, value) in pairs {
            request = request.query(*key, value);
        }

        let response = request.call()?;
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}

/// Query pairs for an archive request.
fn archive_pairs(id: &RouteId, query: &ArchiveQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("id", id.as_str().to_owned())];
    if let Some(year) = query.year {
        pairs.push(("year", year.to_string()));
    }
    if let Some(month) = query.month {
        pairs.push(("month", month.to_string()));
    }
    if let Some(page) = query.page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(category) = &query.category {
        pairs.push(("category", category.as_str().to_owned()));
    }
    if let Some(tag) = &query.tag {
        pairs.push(("tag", tag.as_str().to_owned()));
    }
    pairs
}

#[async_trait]
impl ContentFetcher for CmsClient {
    async fn fetch_sitemap(&self, id: Option<&RouteId>) -> Result<Vec<RouteNode>, ApiError> {
        let client = self.clone();
        let pairs = id
            .map(|id| vec![("id", id.as_str().to_owned())])
            .unwrap_or_default();
        tokio::task::spawn_blocking(move || client.get_json("sitemap", &pairs)).await?
    }

    async fn fetch_start_page(&self, id: &RouteId) -> Result<ContentModel, ApiError> {
        let client = self.clone();
        let pairs = vec![("id", id.as_str().to_owned())];
        tokio::task::spawn_blocking(move || client.get_json("startpage", &pairs)).await?
    }

    async fn fetch_archive(
        &self,
        id: &RouteId,
        query: &ArchiveQuery,
    ) -> Result<ContentModel, ApiError> {
        let client = self.clone();
        let pairs = archive_pairs(id, query);
        tokio::task::spawn_blocking(move || client.get_json("archive", &pairs)).await?
    }

    async fn fetch_page(&self, id: &RouteId) -> Result<ContentModel, ApiError> {
        let client = self.clone();
        let pairs = vec![("id", id.as_str().to_owned())];
        tokio::task::spawn_blocking(move || client.get_json("page", &pairs)).await?
    }

    async fn fetch_post(&self, id: &RouteId) -> Result<ContentModel, ApiError> {
        let client = self.clone();
        let pairs = vec![("id", id.as_str().to_owned())];
        tokio::task::spawn_blocking(move || client.get_json("post", &pairs)).await?
    }
}
