//! In-memory object store for testing

use async_trait::async_trait;
use lingo::storage::{ObjectStore, StorageUri};
use lingo::{LingoError, LingoResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockStore {
    objects: HashMap<String, String>,
    /// Every URI that was read
    pub reads: Arc<Mutex<Vec<String>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, uri: &str, text: &str) -> Self {
        self.objects.insert(uri.to_string(), text.to_string());
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn read_text(&self, uri: &StorageUri) -> LingoResult<String> {
        let key = uri.to_string();
        self.reads.lock().unwrap().push(key.clone());
        self.objects
            .get(&key)
            .cloned()
            .ok_or_else(|| LingoError::Resolution(format!("{} not found", key)))
    }
}
