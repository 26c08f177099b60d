use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use inbox_digest_core::domain::Article;
use inbox_digest_infra::omnivore::documents::ARCHIVE_DOCUMENT;
use inbox_digest_infra::omnivore::{GraphqlTransport, OmnivoreError};
use serde_json::{Value, json};

/// In-memory transport that counts calls and answers archive mutations.
#[derive(Default)]
pub struct FakeTransport {
    search: Option<Value>,
    failing: Vec<String>,
    rejecting: Vec<String>,
    archive_delay: Option<Duration>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    archived: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Self::default().shared()
    }

    pub fn with_search(envelope: Value) -> Arc<Self> {
        Self::default().searching(envelope).shared()
    }

    pub fn searching(mut self, envelope: Value) -> Self {
        self.search = Some(envelope);
        self
    }

    /// Delays every archive reply, counting it as completed only afterwards.
    pub fn archive_delay(mut self, delay: Duration) -> Self {
        self.archive_delay = Some(delay);
        self
    }

    pub fn failing_archive(mut self, link_id: &str) -> Self {
        self.failing.push(link_id.to_string());
        self
    }

    pub fn rejecting_archive(mut self, link_id: &str) -> Self {
        self.rejecting.push(link_id.to_string());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn archived_ids(&self) -> Vec<String> {
        self.archived.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlTransport for FakeTransport {
    async fn send(&self, document: &str, variables: Value) -> Result<Value, OmnivoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if document != ARCHIVE_DOCUMENT {
            return Ok(self
                .search
                .clone()
                .unwrap_or_else(|| search_envelope(json!([]), 0)));
        }
        let link_id = variables["input"]["linkId"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        self.archived.lock().unwrap().push(link_id.clone());
        if let Some(delay) = self.archive_delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&link_id) {
            return Err(OmnivoreError::EmptyResult("setLinkArchived"));
        }
        if self.rejecting.contains(&link_id) {
            return Ok(json!({
                "data": { "setLinkArchived": { "message": "not found", "errorCodes": ["NOT_FOUND"] } }
            }));
        }
        Ok(json!({
            "data": { "setLinkArchived": { "linkId": link_id, "message": "Link archived" } }
        }))
    }
}

pub fn search_envelope(edges: Value, total: u64) -> Value {
    json!({
        "data": {
            "search": {
                "edges": edges,
                "pageInfo": { "totalCount": total }
            }
        }
    })
}

pub fn article(id: &str, words_count: u64) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {id}"),
        url: format!("https://example.com/{id}"),
        author: None,
        words_count,
        highlights: Vec::new(),
    }
}
