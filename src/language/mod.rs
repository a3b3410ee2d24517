//! Natural Language Service
//!
//! Trait seam over the remote analysis service plus its REST implementation.

use crate::error::LingoResult;
use async_trait::async_trait;

pub mod client;
pub mod model;

pub use client::RestLanguageClient;
pub use model::{
    AnnotateTextResponse, ClassifyResponse, EntitiesResponse, Features, SentimentResponse,
    SyntaxResponse,
};

/// Remote text analysis operations
#[async_trait]
pub trait LanguageService: Send + Sync {
    async fn analyze_entities(&self, text: &str) -> LingoResult<EntitiesResponse>;

    async fn analyze_sentiment(&self, text: &str) -> LingoResult<SentimentResponse>;

    async fn analyze_syntax(&self, text: &str) -> LingoResult<SyntaxResponse>;

    /// Entities with per-entity sentiment attached
    async fn analyze_entity_sentiment(&self, text: &str) -> LingoResult<EntitiesResponse>;

    async fn classify_text(&self, text: &str) -> LingoResult<ClassifyResponse>;

    /// Several analyses in a single round trip
    async fn annotate_text(&self, text: &str, features: Features)
        -> LingoResult<AnnotateTextResponse>;
}
