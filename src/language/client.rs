//! REST client for the Natural Language API

use super::model::{
    AnnotateTextResponse, ClassifyResponse, Document, EntitiesResponse, Features,
    SentimentResponse, SyntaxResponse,
};
use super::LanguageService;
use crate::config::Config;
use crate::error::{LingoError, LingoResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Talks to `{endpoint}/documents:<method>`
#[derive(Debug, Clone)]
pub struct RestLanguageClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl RestLanguageClient {
    pub fn new(config: &Config) -> LingoResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LingoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.language_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> LingoResult<T> {
        let url = format!("{}/documents:{}", self.endpoint, method);
        debug!("🌐 POST {}", url);

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Language API error ({}) on {}", status, method);
            return Err(LingoError::Remote(format!("HTTP {}: {}", status, body_text)));
        }

        debug!("🧠 {} raw body: {}", method, body_text);

        serde_json::from_str(&body_text).map_err(|e| {
            LingoError::Remote(format!(
                "Failed to decode {} response: {} - Body: {}",
                method, e, body_text
            ))
        })
    }

    fn document_body(text: &str) -> Value {
        json!({
            "document": Document::plain_text(text),
            "encodingType": "UTF8",
        })
    }
}

#[async_trait]
impl LanguageService for RestLanguageClient {
    async fn analyze_entities(&self, text: &str) -> LingoResult<EntitiesResponse> {
        self.call("analyzeEntities", Self::document_body(text)).await
    }

    async fn analyze_sentiment(&self, text: &str) -> LingoResult<SentimentResponse> {
        self.call("analyzeSentiment", Self::document_body(text)).await
    }

    async fn analyze_syntax(&self, text: &str) -> LingoResult<SyntaxResponse> {
        self.call("analyzeSyntax", Self::document_body(text)).await
    }

    async fn analyze_entity_sentiment(&self, text: &str) -> LingoResult<EntitiesResponse> {
        self.call("analyzeEntitySentiment", Self::document_body(text)).await
    }

    async fn classify_text(&self, text: &str) -> LingoResult<ClassifyResponse> {
        // classifyText takes no encodingType
        self.call("classifyText", json!({ "document": Document::plain_text(text) }))
            .await
    }

    async fn annotate_text(
        &self,
        text: &str,
        features: Features,
    ) -> LingoResult<AnnotateTextResponse> {
        let mut body = Self::document_body(text);
        body["features"] = serde_json::to_value(features)?;
        self.call("annotateText", body).await
    }
}
