//! Mock language service for testing
//!
//! Answers every call with canned responses for
//! "Barack Obama lives in Washington D.C." and records what it was asked.

use async_trait::async_trait;
use lingo::language::{
    AnnotateTextResponse, ClassifyResponse, EntitiesResponse, Features, LanguageService,
    SentimentResponse, SyntaxResponse,
};
use lingo::{LingoError, LingoResult};
use std::sync::{Arc, Mutex};

const ENTITIES: &str = r#"{
  "entities": [
    {
      "name": "Barack Obama",
      "type": "PERSON",
      "metadata": {
        "mid": "/m/02mjmr",
        "wikipedia_url": "https://en.wikipedia.org/wiki/Barack_Obama"
      },
      "salience": 0.8980188,
      "mentions": [{"text": {"content": "Barack Obama", "beginOffset": 0}, "type": "PROPER"}]
    },
    {
      "name": "Washington D.C.",
      "type": "LOCATION",
      "metadata": {
        "mid": "/m/0rh6k",
        "wikipedia_url": "https://en.wikipedia.org/wiki/Washington,_D.C."
      },
      "salience": 0.10198119,
      "mentions": [{"text": {"content": "Washington D.C.", "beginOffset": 22}, "type": "PROPER"}]
    }
  ],
  "language": "en"
}"#;

const ENTITY_SENTIMENT: &str = r#"{
  "entities": [
    {"name": "Barack Obama", "type": "PERSON", "salience": 0.8980188,
     "sentiment": {"magnitude": 0.1, "score": 0.1}},
    {"name": "Washington D.C.", "type": "LOCATION", "salience": 0.10198119,
     "sentiment": {}}
  ],
  "language": "en"
}"#;

const SENTIMENT: &str = r#"{
  "documentSentiment": {"magnitude": 0.2, "score": 0.2},
  "language": "en",
  "sentences": [
    {"text": {"content": "Barack Obama lives in Washington D.C.", "beginOffset": 0},
     "sentiment": {"magnitude": 0.2, "score": 0.2}}
  ]
}"#;

const SYNTAX: &str = r#"{
  "sentences": [{"text": {"content": "Barack Obama lives in Washington D.C.", "beginOffset": 0}}],
  "tokens": [
    {"text": {"content": "Barack", "beginOffset": 0}, "partOfSpeech": {"tag": "NOUN"}, "lemma": "Barack"},
    {"text": {"content": "Obama", "beginOffset": 7}, "partOfSpeech": {"tag": "NOUN"}, "lemma": "Obama"},
    {"text": {"content": "lives", "beginOffset": 13}, "partOfSpeech": {"tag": "VERB"}, "lemma": "live"},
    {"text": {"content": "in", "beginOffset": 19}, "partOfSpeech": {"tag": "ADP"}, "lemma": "in"},
    {"text": {"content": "Washington", "beginOffset": 22}, "partOfSpeech": {"tag": "NOUN"}, "lemma": "Washington"},
    {"text": {"content": "D.C.", "beginOffset": 33}, "partOfSpeech": {"tag": "NOUN"}, "lemma": "D.C."}
  ],
  "language": "en"
}"#;

const CATEGORIES: &str = r#"{"categories": [{"name": "/News/Politics", "confidence": 0.99}]}"#;

pub fn entities_response() -> EntitiesResponse {
    serde_json::from_str(ENTITIES).unwrap()
}

pub fn sentiment_response() -> SentimentResponse {
    serde_json::from_str(SENTIMENT).unwrap()
}

pub fn syntax_response() -> SyntaxResponse {
    serde_json::from_str(SYNTAX).unwrap()
}

/// Canned JSON bodies keyed by REST method, for HTTP-level fakes
pub fn canned_body(method: &str) -> String {
    match method {
        "analyzeEntities" => ENTITIES.to_string(),
        "analyzeEntitySentiment" => ENTITY_SENTIMENT.to_string(),
        "analyzeSentiment" => SENTIMENT.to_string(),
        "analyzeSyntax" => SYNTAX.to_string(),
        "classifyText" => CATEGORIES.to_string(),
        "annotateText" => serde_json::to_string(&annotate_response()).unwrap(),
        other => panic!("no canned body for {}", other),
    }
}

fn annotate_response() -> AnnotateTextResponse {
    let entities = entities_response();
    let sentiment = sentiment_response();
    let syntax = syntax_response();
    AnnotateTextResponse {
        sentences: sentiment.sentences,
        tokens: syntax.tokens,
        entities: entities.entities,
        document_sentiment: sentiment.document_sentiment,
        language: "en".to_string(),
        categories: Vec::new(),
    }
}

/// Mock language service that records requests
#[derive(Debug, Default)]
pub struct MockLanguage {
    /// (method, text) for every call
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    /// Fail every call with a remote error
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockLanguage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::new();
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &str, text: &str) -> LingoResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), text.to_string()));
        if *self.should_fail.lock().unwrap() {
            return Err(LingoError::Remote(
                "HTTP 503 Service Unavailable: backend down".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LanguageService for MockLanguage {
    async fn analyze_entities(&self, text: &str) -> LingoResult<EntitiesResponse> {
        self.record("analyzeEntities", text)?;
        Ok(entities_response())
    }

    async fn analyze_sentiment(&self, text: &str) -> LingoResult<SentimentResponse> {
        self.record("analyzeSentiment", text)?;
        Ok(sentiment_response())
    }

    async fn analyze_syntax(&self, text: &str) -> LingoResult<SyntaxResponse> {
        self.record("analyzeSyntax", text)?;
        Ok(syntax_response())
    }

    async fn analyze_entity_sentiment(&self, text: &str) -> LingoResult<EntitiesResponse> {
        self.record("analyzeEntitySentiment", text)?;
        Ok(serde_json::from_str(ENTITY_SENTIMENT).unwrap())
    }

    async fn classify_text(&self, text: &str) -> LingoResult<ClassifyResponse> {
        self.record("classifyText", text)?;
        Ok(serde_json::from_str(CATEGORIES).unwrap())
    }

    async fn annotate_text(
        &self,
        text: &str,
        features: Features,
    ) -> LingoResult<AnnotateTextResponse> {
        self.record("annotateText", text)?;
        assert_eq!(features, Features::all());
        Ok(annotate_response())
    }
}
