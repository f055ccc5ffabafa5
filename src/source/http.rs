//! HTTP source
//!
//! Fetches rule or manifest text over `http://` or `https://` with a
//! configurable timeout and User-Agent. Requests are not retried.

use crate::error::SourceError;
use crate::source::{SourceConfig, SourceFetcher};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(&SourceConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SourceError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and return the body
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        debug!(url, "fetching");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(url)
            } else {
                SourceError::network(url, e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(url)
            } else {
                SourceError::network(url, format!("failed to read body: {}", e))
            }
        })?;

        debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl SourceFetcher for HttpClient {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        self.get_bytes(location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned HTTP response and returns the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/rules", addr)
    }

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let config = SourceConfig::new(Duration::from_secs(60), "test-agent/1.0");
        assert!(HttpClient::with_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_get_bytes_success() {
        let url = serve_once("HTTP/1.1 200 OK", "acme/pkg =v1.0.0\n").await;
        let client = HttpClient::new().unwrap();
        let body = client.fetch(&url).await.unwrap();
        assert_eq!(body, b"acme/pkg =v1.0.0\n");
    }

    #[tokio::test]
    async fn test_get_bytes_http_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", "").await;
        let client = HttpClient::new().unwrap();
        let err = client.fetch(&url).await.unwrap_err();
        assert!(matches!(err, SourceError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_get_bytes_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().unwrap();
        let err = client.fetch(&format!("http://{}/", addr)).await.unwrap_err();
        assert!(matches!(err, SourceError::Network { .. }));
    }

    fn short_timeout_client() -> HttpClient {
        let config = SourceConfig::new(Duration::from_secs(1), "test-agent/1.0");
        HttpClient::with_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_bytes_timeout_without_response() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Hold the connection open without answering
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let url = format!("http://{}/rules", addr);
        let err = short_timeout_client().fetch(&url).await.unwrap_err();
        match err {
            SourceError::Timeout { url: failed } => assert_eq!(failed, url),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_get_bytes_timeout_while_reading_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = "HTTP/1.1 200 OK\r\nContent-Length: 64\r\n\r\nacme/pkg";
            socket.write_all(head.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let url = format!("http://{}/rules", addr);
        let err = short_timeout_client().fetch(&url).await.unwrap_err();
        assert!(matches!(err, SourceError::Timeout { .. }));
    }
}
