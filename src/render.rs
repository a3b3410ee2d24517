//! Text rendering of analysis results
//!
//! One labelled field per line. Repeated items keep the service's order and
//! are each followed by a blank line. Downstream consumers match these labels
//! exactly, so do not reword them.

use crate::language::model::{ClassificationCategory, Entity, Sentiment};
use crate::language::{ClassifyResponse, EntitiesResponse, SentimentResponse, SyntaxResponse};

pub fn entities(resp: &EntitiesResponse) -> Vec<String> {
    let mut lines = Vec::new();
    for entity in &resp.entities {
        lines.push(format!("Name: {}", entity.name));
        lines.push(format!("Type: {}", entity.kind));
        lines.push(format!("Salience: {}", entity.salience));
        if let Some(url) = entity.wikipedia_url() {
            lines.push(format!("Wikipedia URL: {}", url));
        }
        if let Some(mid) = entity.mid() {
            lines.push(format!("Knowledge Graph MID: {}", mid));
        }
        lines.push(String::new());
    }
    lines
}

pub fn sentiment(resp: &SentimentResponse) -> Vec<String> {
    let mut lines = vec!["Document Sentiment:".to_string()];
    push_sentiment(&mut lines, &resp.document_sentiment);
    lines.push(String::new());

    for sentence in &resp.sentences {
        lines.push(format!("Sentence: {}", sentence.text.content));
        lines.push("Sentence Sentiment:".to_string());
        push_sentiment(&mut lines, &sentence.sentiment.unwrap_or_default());
        lines.push(String::new());
    }
    lines
}

fn push_sentiment(lines: &mut Vec<String>, sentiment: &Sentiment) {
    lines.push(format!("  Magnitude: {}", sentiment.magnitude));
    lines.push(format!("  Score: {}", sentiment.score));
}

pub fn syntax(resp: &SyntaxResponse) -> Vec<String> {
    let mut lines = Vec::new();
    for token in &resp.tokens {
        lines.push(format!("Token text: {}", token.text.content));
        lines.push(format!("Token part of speech: {}", token.part_of_speech.tag));
        lines.push(String::new());
    }
    lines
}

pub fn entity_sentiment(resp: &EntitiesResponse) -> Vec<String> {
    resp.entities.iter().flat_map(entity_sentiment_lines).collect()
}

fn entity_sentiment_lines(entity: &Entity) -> Vec<String> {
    let sentiment = entity.sentiment.unwrap_or_default();
    vec![
        format!("Entity Name: {}", entity.name),
        format!("Entity Type: {}", entity.kind),
        format!("Entity Salience: {}", entity.salience),
        format!("Entity Magnitude: {}", sentiment.magnitude),
        format!("Entity Score: {}", sentiment.score),
        String::new(),
    ]
}

pub fn categories(resp: &ClassifyResponse) -> Vec<String> {
    resp.categories.iter().flat_map(category_lines).collect()
}

fn category_lines(category: &ClassificationCategory) -> Vec<String> {
    vec![
        format!("Category Name: {}", category.name),
        format!("Confidence: {}", category.confidence),
        String::new(),
    ]
}
