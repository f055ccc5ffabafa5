//! Rule and manifest text acquisition
//!
//! Sources are either local paths or `http://` / `https://` URLs.

mod http;
mod local;

pub use http::HttpClient;
pub use local::LocalFetcher;

use crate::error::SourceError;
use async_trait::async_trait;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("modcop/", env!("CARGO_PKG_VERSION"));

/// Configuration for source acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl SourceConfig {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }
}

/// Where a source lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Local,
    Remote,
}

impl SourceKind {
    /// Classifies a location string
    pub fn of(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SourceKind::Remote
        } else {
            SourceKind::Local
        }
    }
}

/// Trait for fetching the raw bytes of a source
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError>;
}

/// Dispatches to the local or HTTP fetcher based on the location
#[derive(Clone)]
pub struct Fetcher {
    local: LocalFetcher,
    http: HttpClient,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        Ok(Self {
            local: LocalFetcher,
            http: HttpClient::with_config(config)?,
        })
    }
}

#[async_trait]
impl SourceFetcher for Fetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        match SourceKind::of(location) {
            SourceKind::Local => self.local.fetch(location).await,
            SourceKind::Remote => self.http.fetch(location).await,
        }
    }
}
