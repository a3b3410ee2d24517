//! Cloud Text-to-Speech backend (`text:synthesize`)

use super::{AudioConfig, SpeechSynthesizer, VoiceSelection};
use crate::config::Config;
use crate::error::{LingoError, LingoResult};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[derive(Debug, Clone)]
pub struct CloudSynthesizer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl CloudSynthesizer {
    pub fn new(config: &Config) -> LingoResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LingoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.tts_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for CloudSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        audio: &AudioConfig,
    ) -> LingoResult<Vec<u8>> {
        let url = format!("{}/text:synthesize", self.endpoint);
        debug!("🌐 POST {} ({:?}, {:?})", url, voice, audio);

        let mut request = self.client.post(&url).json(&serde_json::json!({
            "input": { "text": text },
            "voice": voice,
            "audioConfig": audio,
        }));
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
            warn!("❌ Text-to-Speech API error ({})", status);
            return Err(LingoError::Remote(format!("HTTP {}: {}", status, body_text)));
        }

        let parsed: SynthesizeResponse = serde_json::from_str(&body_text).map_err(|e| {
            LingoError::Remote(format!("Failed to decode synthesize response: {}", e))
        })?;

        let audio = base64::engine::general_purpose::STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| LingoError::Remote(format!("Invalid audio payload: {}", e)))?;

        if audio.is_empty() {
            return Err(LingoError::Remote(
                "Synthesize response carried no audio content".to_string(),
            ));
        }
        Ok(audio)
    }

    fn name(&self) -> &str {
        "cloud"
    }
}
