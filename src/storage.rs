//! Object storage access
//!
//! Reads `gs://bucket/object` references as UTF-8 text. Every failure here
//! is a resolution error: the caller cannot analyse content it could not read.

use crate::config::Config;
use crate::error::{LingoError, LingoResult};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

lazy_static! {
    static ref URI_PATTERN: Regex =
        Regex::new(r"^gs://([a-z0-9._\-]+)/(\S+)$").expect("storage URI pattern is valid");
}

/// A parsed `gs://` object reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUri {
    pub bucket: String,
    pub object: String,
}

impl StorageUri {
    /// True if `raw` has the shape of a storage reference
    pub fn looks_like(raw: &str) -> bool {
        URI_PATTERN.is_match(raw)
    }
}

impl FromStr for StorageUri {
    type Err = LingoError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = URI_PATTERN.captures(raw).ok_or_else(|| {
            LingoError::Resolution(format!(
                "'{}' is not a storage reference (expected gs://<bucket>/<object>)",
                raw
            ))
        })?;

        Ok(Self {
            bucket: caps[1].to_string(),
            object: caps[2].to_string(),
        })
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.object)
    }
}

/// Source of externally stored text
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn read_text(&self, uri: &StorageUri) -> LingoResult<String>;
}

/// Cloud Storage JSON API, media download
#[derive(Debug, Clone)]
pub struct GcsObjectStore {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl GcsObjectStore {
    pub fn new(config: &Config) -> LingoResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LingoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.storage_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn object_url(&self, uri: &StorageUri) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}",
            self.endpoint,
            uri.bucket,
            urlencoding::encode(&uri.object)
        )
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn read_text(&self, uri: &StorageUri) -> LingoResult<String> {
        let url = self.object_url(uri);
        debug!("📥 Fetching {} from {}", uri, url);

        let mut request = self.client.get(&url).query(&[("alt", "media")]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LingoError::Resolution(format!("Failed to fetch {}: {}", uri, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LingoError::Resolution(format!(
                "Failed to fetch {}: HTTP {}: {}",
                uri, status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LingoError::Resolution(format!("Failed to read {}: {}", uri, e)))?;

        String::from_utf8(bytes.to_vec())
            .map_err(|e| LingoError::Resolution(format!("{} is not UTF-8 text: {}", uri, e)))
    }
}
