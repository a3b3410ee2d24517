//! Content resolution
//!
//! Decides whether a `--content` argument is literal text or a storage
//! reference, and turns either into the raw text sent for analysis.

use crate::error::{LingoError, LingoResult};
use crate::storage::{ObjectStore, StorageUri};
use clap::ValueEnum;
use tracing::{debug, info};

/// How to interpret a content argument
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    /// `gs://bucket/object` is a storage reference, anything else is text
    #[default]
    Auto,
    /// Always literal text
    Text,
    /// Always a storage reference
    Uri,
}

impl ContentKind {
    pub fn parse(raw: &str) -> LingoResult<Self> {
        <Self as ValueEnum>::from_str(raw, true).map_err(|_| {
            LingoError::InvalidCommand(format!(
                "unknown content kind '{}' (expected auto, text or uri)",
                raw
            ))
        })
    }
}

/// Where the text to analyse comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Text(String),
    Storage(StorageUri),
}

impl ContentSource {
    pub fn from_arg(raw: &str, kind: ContentKind) -> LingoResult<Self> {
        match kind {
            ContentKind::Text => Ok(Self::Text(raw.to_string())),
            ContentKind::Uri => Ok(Self::Storage(raw.parse()?)),
            ContentKind::Auto if StorageUri::looks_like(raw) => Ok(Self::Storage(raw.parse()?)),
            ContentKind::Auto => Ok(Self::Text(raw.to_string())),
        }
    }

    /// Produce the raw text, reading from `store` for storage references
    pub async fn resolve(&self, store: &dyn ObjectStore) -> LingoResult<String> {
        let text = match self {
            Self::Text(text) => {
                debug!("Using literal content ({} bytes)", text.len());
                text.clone()
            }
            Self::Storage(uri) => {
                info!("📦 Reading content from {}", uri);
                store.read_text(uri).await?
            }
        };

        if text.trim().is_empty() {
            return Err(LingoError::Resolution(match self {
                Self::Text(_) => "content is empty".to_string(),
                Self::Storage(uri) => format!("{} contains no text", uri),
            }));
        }

        Ok(text)
    }
}
