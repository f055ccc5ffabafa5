//! Local file source

use crate::error::SourceError;
use crate::source::SourceFetcher;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads sources from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

#[async_trait]
impl SourceFetcher for LocalFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        let path = Path::new(location);
        debug!(path = %path.display(), "reading");

        tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::not_found(path),
            _ => SourceError::read(path, e),
        })
    }
}
