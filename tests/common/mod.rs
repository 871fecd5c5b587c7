#![allow(dead_code)]

use axum::{
    extract::{Path, RawQuery},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use chrono::{TimeZone, Utc};
use portfolio_site::error::{PortfolioError, Result};
use portfolio_site::github::RepositorySource;
use portfolio_site::types::{RepositoryQuery, RepositorySummary};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn repo(id: u64) -> RepositorySummary {
    RepositorySummary {
        id,
        name: format!("project-{}", id),
        description: Some(format!("Project number {}", id)),
        html_url: format!("https://github.com/octocat/project-{}", id),
        homepage: None,
        stargazers_count: id as u32,
        forks_count: 1,
        size: 2048,
        language: Some("TypeScript".to_string()),
        created_at: Utc.with_ymd_and_hms(2023, 1, 17, 8, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        topics: None,
    }
}

pub fn repo_with_homepage(id: u64, homepage: &str) -> RepositorySummary {
    RepositorySummary {
        homepage: Some(homepage.to_string()),
        ..repo(id)
    }
}

/// A repository the way the GitHub API returns it, extra fields included.
pub fn github_repo_json(id: u64, homepage: Value) -> Value {
    json!({
        "id": id,
        "node_id": "R_kgDOexample",
        "name": format!("project-{}", id),
        "full_name": format!("octocat/project-{}", id),
        "private": false,
        "description": null,
        "fork": false,
        "html_url": format!("https://github.com/octocat/project-{}", id),
        "homepage": homepage,
        "size": 512,
        "stargazers_count": 3,
        "watchers_count": 3,
        "forks_count": 0,
        "language": null,
        "topics": ["portfolio", "rust"],
        "created_at": "2023-01-17T08:30:00Z",
        "updated_at": "2024-03-05T12:00:00Z",
        "pushed_at": "2024-03-05T12:00:00Z"
    })
}

/// Returns the same list on every call and counts calls.
pub struct StaticSource {
    pub repos: Vec<RepositorySummary>,
    pub calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(repos: Vec<RepositorySummary>) -> Arc<Self> {
        Arc::new(StaticSource {
            repos,
            calls: AtomicUsize::new(0),
        })
    }
}

#[ractor::async_trait]
impl RepositorySource for StaticSource {
    async fn list_repositories(&self, _query: &RepositoryQuery) -> Result<Vec<RepositorySummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repos.clone())
    }
}

/// Always fails, like an unreachable provider.
pub struct FailingSource;

#[ractor::async_trait]
impl RepositorySource for FailingSource {
    async fn list_repositories(&self, _query: &RepositoryQuery) -> Result<Vec<RepositorySummary>> {
        Err(PortfolioError::ApiError("provider exploded".to_string()))
    }
}

struct SetOnDrop(Arc<AtomicBool>);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Holds every fetch until `release` is called.
pub struct GatedSource {
    pub repos: Vec<RepositorySummary>,
    pub gate: Notify,
    pub calls: AtomicUsize,
    pub completed: Arc<AtomicBool>,
    pub dropped: Arc<AtomicBool>,
}

impl GatedSource {
    pub fn new(repos: Vec<RepositorySummary>) -> Arc<Self> {
        Arc::new(GatedSource {
            repos,
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
            completed: Arc::new(AtomicBool::new(false)),
            dropped: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[ractor::async_trait]
impl RepositorySource for GatedSource {
    async fn list_repositories(&self, _query: &RepositoryQuery) -> Result<Vec<RepositorySummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _guard = SetOnDrop(Arc::clone(&self.dropped));
        self.gate.notified().await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(self.repos.clone())
    }
}

/// What the fake provider answers with.
#[derive(Clone)]
pub enum ProviderReply {
    Json(Value),
    Status(StatusCode, Vec<(&'static str, &'static str)>),
    Raw(&'static str),
}

/// Requests seen by the fake provider, as `path?query`.
pub type SeenRequests = Arc<Mutex<Vec<String>>>;

/// Serve `/users/:handle/repos` on an ephemeral port and return its base URL.
pub async fn spawn_provider(reply: ProviderReply) -> (String, SeenRequests) {
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let app = Router::new().route(
        "/users/:handle/repos",
        get(move |Path(handle): Path<String>, RawQuery(query): RawQuery| {
            let reply = reply.clone();
            let recorder = Arc::clone(&recorder);
            async move {
                recorder.lock().unwrap().push(format!(
                    "/users/{}/repos?{}",
                    handle,
                    query.unwrap_or_default()
                ));

                let mut headers = HeaderMap::new();
                match reply {
                    ProviderReply::Json(body) => {
                        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
                        (StatusCode::OK, headers, body.to_string())
                    }
                    ProviderReply::Status(status, extra) => {
                        for (name, value) in extra {
                            headers.insert(name, HeaderValue::from_static(value));
                        }
                        (status, headers, json!({"message": "nope"}).to_string())
                    }
                    ProviderReply::Raw(body) => {
                        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
                        (StatusCode::OK, headers, body.to_string())
                    }
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
