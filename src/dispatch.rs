//! Command dispatch
//!
//! Maps a command name onto one remote analysis call and renders the result
//! as labelled text lines.

use crate::content::{ContentKind, ContentSource};
use crate::error::{LingoError, LingoResult};
use crate::language::{Features, LanguageService};
use crate::render;
use crate::storage::ObjectStore;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Analysis commands understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    All,
    Entities,
    Sentiment,
    Syntax,
    EntitySentiment,
    Classify,
}

impl Command {
    pub const VARIANTS: [Command; 6] = [
        Command::All,
        Command::Entities,
        Command::Sentiment,
        Command::Syntax,
        Command::EntitySentiment,
        Command::Classify,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::All => "all",
            Command::Entities => "entities",
            Command::Sentiment => "sentiment",
            Command::Syntax => "syntax",
            Command::EntitySentiment => "entity-sentiment",
            Command::Classify => "classify",
        }
    }
}

impl FromStr for Command {
    type Err = LingoError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::VARIANTS
            .into_iter()
            .find(|cmd| cmd.name() == name)
            .ok_or_else(|| {
                let known: Vec<&str> = Command::VARIANTS.iter().map(Command::name).collect();
                LingoError::InvalidCommand(format!(
                    "'{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Routes commands to the language service
#[derive(Clone)]
pub struct Dispatcher {
    language: Arc<dyn LanguageService>,
    store: Arc<dyn ObjectStore>,
}

impl Dispatcher {
    pub fn new(language: Arc<dyn LanguageService>, store: Arc<dyn ObjectStore>) -> Self {
        Self { language, store }
    }

    /// Dispatch by name with free-form parameters.
    ///
    /// Recognised parameters are `content` (required) and `content_kind`
    /// (`auto`, `text` or `uri`). The command name is validated before
    /// anything else happens.
    pub async fn dispatch(
        &self,
        command: &str,
        params: &HashMap<String, String>,
    ) -> LingoResult<Vec<String>> {
        let command: Command = command.parse()?;

        for key in params.keys() {
            if key != "content" && key != "content_kind" {
                debug!("Ignoring unknown parameter '{}'", key);
            }
        }

        let kind = match params.get("content_kind") {
            Some(raw) => ContentKind::parse(raw)?,
            None => ContentKind::default(),
        };
        let raw = params
            .get("content")
            .ok_or_else(|| LingoError::Resolution("no content supplied".to_string()))?;

        let source = ContentSource::from_arg(raw, kind)?;
        self.run(command, &source).await
    }

    /// Resolve content, call the service and render. Lines are only
    /// returned once every step succeeded.
    pub async fn run(&self, command: Command, source: &ContentSource) -> LingoResult<Vec<String>> {
        let text = source.resolve(self.store.as_ref()).await?;
        info!("🎯 Running '{}' on {} bytes of text", command, text.len());

        let language = self.language.as_ref();
        let lines = match command {
            Command::Entities => render::entities(&language.analyze_entities(&text).await?),
            Command::Sentiment => render::sentiment(&language.analyze_sentiment(&text).await?),
            Command::Syntax => render::syntax(&language.analyze_syntax(&text).await?),
            Command::EntitySentiment => {
                render::entity_sentiment(&language.analyze_entity_sentiment(&text).await?)
            }
            Command::Classify => render::categories(&language.classify_text(&text).await?),
            Command::All => {
                let resp = language.annotate_text(&text, Features::all()).await?;
                let mut lines = render::entities(&resp.entities());
                lines.extend(render::sentiment(&resp.sentiment()));
                lines.extend(render::syntax(&resp.syntax()));
                lines
            }
        };

        debug!("Rendered {} lines for '{}'", lines.len(), command);
        Ok(lines)
    }
}
