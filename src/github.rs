use crate::error::{PortfolioError, Result};
use crate::models::RateLimitState;
use crate::types::{RepositoryQuery, RepositorySummary};
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));
const LOW_RATE_LIMIT: u32 = 10;

/// Anything that can list an account's public repositories.
#[ractor::async_trait]
pub trait RepositorySource: Send + Sync + 'static {
    async fn list_repositories(&self, query: &RepositoryQuery) -> Result<Vec<RepositorySummary>>;
}

/// Anonymous client for the GitHub REST API
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        let base_url = Url::parse(base_url)?;

        Ok(GitHubClient { client, base_url })
    }

    /// `{base}/users/{handle}/repos?sort=pushed&per_page={limit}`
    pub fn repos_url(&self, query: &RepositoryQuery) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PortfolioError::ConfigError(format!(
                    "API base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["users", query.handle.as_str(), "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "pushed")
            .append_pair("per_page", &query.limit.to_string());
        Ok(url)
    }

    /// List repositories most recently pushed first, along with the rate
    /// limit the provider reported for this call.
    pub async fn list_user_repos(
        &self,
        query: &RepositoryQuery,
    ) -> Result<(Vec<RepositorySummary>, RateLimitState)> {
        let url = self.repos_url(query)?;
        debug!(%url, "Requesting repository listing");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let rate_limit = rate_limit_state(response.headers());
        if rate_limit.remaining < LOW_RATE_LIMIT && !rate_limit.is_limited {
            warn!(
                remaining = rate_limit.remaining,
                reset = %rate_limit.reset_time,
                "Anonymous rate limit running low"
            );
        }

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await?;
                let repos: Vec<RepositorySummary> = serde_json::from_slice(&body)?;
                Ok((repos, rate_limit))
            }
            StatusCode::NOT_FOUND => Err(PortfolioError::NotFound(format!(
                "No such account: {}",
                query.handle
            ))),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limit.is_limited => {
                Err(PortfolioError::RateLimitExceeded(format!(
                    "API rate limit exceeded. Reset at: {}",
                    rate_limit.reset_time
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[ractor::async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self, query: &RepositoryQuery) -> Result<Vec<RepositorySummary>> {
        let (repos, _) = self.list_user_repos(query).await?;
        Ok(repos)
    }
}

/// Read the `X-RateLimit-*` headers. Missing headers mean "not limited".
pub fn rate_limit_state(headers: &HeaderMap) -> RateLimitState {
    let header_u32 = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
    };

    let fallback = RateLimitState::default();
    let limit = header_u32("X-RateLimit-Limit").unwrap_or(fallback.limit);
    let remaining = header_u32("X-RateLimit-Remaining").unwrap_or(limit);

    let reset_time = headers
        .get("X-RateLimit-Reset")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|timestamp| DateTime::<Utc>::from_timestamp(timestamp, 0))
        .unwrap_or(fallback.reset_time);

    RateLimitState {
        remaining,
        limit,
        reset_time,
        is_limited: remaining == 0,
    }
}

/// The fetch boundary: every failure collapses to an empty list.
///
/// Errors are logged for diagnostics and never propagated, so a viewer
/// sees the same grid for "request failed" and "account has no
/// repositories". The provider order is kept and the result is capped at
/// `query.limit`.
pub async fn fetch_repositories(
    source: &dyn RepositorySource,
    query: &RepositoryQuery,
) -> Vec<RepositorySummary> {
    match source.list_repositories(query).await {
        Ok(mut repos) => {
            repos.truncate(query.limit as usize);
            info!(
                handle = %query.handle,
                count = repos.len(),
                "Fetched repositories"
            );
            repos
        }
        Err(e) => {
            error!(
                handle = %query.handle,
                error = %e,
                "Failed to fetch repositories, showing an empty grid"
            );
            Vec::new()
        }
    }
}
