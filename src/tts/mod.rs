//! TTS (Text-to-Speech) Module
//!
//! Synthesizes a text file into an audio file through a speech backend.

use crate::config::Config;
use crate::error::{LingoError, LingoResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub mod cloud;

pub use cloud::CloudSynthesizer;

/// Voice to synthesize with; the service picks a concrete voice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: String,
    pub ssml_gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: String,
}

impl VoiceSelection {
    pub fn from_config(config: &Config) -> Self {
        Self {
            language_code: config.language_code.clone(),
            ssml_gender: config.ssml_gender.clone(),
        }
    }
}

impl AudioConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            audio_encoding: config.audio_encoding.clone(),
        }
    }
}

/// Trait for speech backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + std::fmt::Debug {
    /// Synthesize text into encoded audio bytes
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        audio: &AudioConfig,
    ) -> LingoResult<Vec<u8>>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory for the configured synthesizer
pub fn create_synthesizer(config: &Config) -> LingoResult<Arc<dyn SpeechSynthesizer>> {
    let synth: Arc<dyn SpeechSynthesizer> = Arc::new(CloudSynthesizer::new(config)?);
    info!("✅ Speech backend '{}' initialized", synth.name());
    Ok(synth)
}

/// Read `path`, synthesize it and write the audio to `output`.
///
/// Returns the confirmation line for the caller to print.
pub async fn synthesize_text_file(
    synth: &dyn SpeechSynthesizer,
    path: &Path,
    output: &Path,
    voice: &VoiceSelection,
    audio: &AudioConfig,
) -> LingoResult<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        LingoError::Resolution(format!("Failed to read {}: {}", path.display(), e))
    })?;
    if text.trim().is_empty() {
        return Err(LingoError::Resolution(format!(
            "{} contains no text",
            path.display()
        )));
    }

    info!("📢 Synthesizing {} ({} bytes)", path.display(), text.len());
    let audio_content = synth.synthesize(&text, voice, audio).await?;

    tokio::fs::write(output, &audio_content).await?;
    info!("💾 Wrote {} bytes to {}", audio_content.len(), output.display());

    Ok(format!("Audio content written to \"{}\"", output.display()))
}
