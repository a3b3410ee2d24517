//! Natural Language API wire types
//!
//! JSON shapes of the v1 REST surface. Numeric fields that the service
//! leaves at zero are omitted from its responses, so almost everything here
//! is `#[serde(default)]`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Document sent for analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl Document {
    pub fn plain_text(content: &str) -> Self {
        Self {
            kind: "PLAIN_TEXT".to_string(),
            content: content.to_string(),
        }
    }
}

/// Sentiment pair (document, sentence or entity level)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sentiment {
    pub magnitude: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSpan {
    pub content: String,
    pub begin_offset: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub metadata: HashMap<String, String>,
    pub salience: f32,
    /// Only present for entity-sentiment analysis
    pub sentiment: Option<Sentiment>,
}

impl Entity {
    pub fn wikipedia_url(&self) -> Option<&str> {
        self.metadata.get("wikipedia_url").map(String::as_str)
    }

    /// Knowledge Graph machine id
    pub fn mid(&self) -> Option<&str> {
        self.metadata.get("mid").map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sentence {
    pub text: TextSpan,
    pub sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PartOfSpeech {
    pub tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Token {
    pub text: TextSpan,
    pub part_of_speech: PartOfSpeech,
    pub lemma: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassificationCategory {
    pub name: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntitiesResponse {
    pub entities: Vec<Entity>,
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SentimentResponse {
    pub document_sentiment: Sentiment,
    pub language: String,
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyntaxResponse {
    pub sentences: Vec<Sentence>,
    pub tokens: Vec<Token>,
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifyResponse {
    pub categories: Vec<ClassificationCategory>,
}

/// Feature switches for `annotateText`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub extract_syntax: bool,
    pub extract_entities: bool,
    pub extract_document_sentiment: bool,
    pub extract_entity_sentiment: bool,
    pub classify_text: bool,
}

impl Features {
    /// Entities, syntax and document sentiment in one call
    pub fn all() -> Self {
        Self {
            extract_syntax: true,
            extract_entities: true,
            extract_document_sentiment: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotateTextResponse {
    pub sentences: Vec<Sentence>,
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
    pub document_sentiment: Sentiment,
    pub language: String,
    pub categories: Vec<ClassificationCategory>,
}

impl AnnotateTextResponse {
    pub fn entities(&self) -> EntitiesResponse {
        EntitiesResponse {
            entities: self.entities.clone(),
            language: self.language.clone(),
        }
    }

    pub fn sentiment(&self) -> SentimentResponse {
        SentimentResponse {
            document_sentiment: self.document_sentiment,
            language: self.language.clone(),
            sentences: self.sentences.clone(),
        }
    }

    pub fn syntax(&self) -> SyntaxResponse {
        SyntaxResponse {
            sentences: self.sentences.clone(),
            tokens: self.tokens.clone(),
            language: self.language.clone(),
        }
    }
}
