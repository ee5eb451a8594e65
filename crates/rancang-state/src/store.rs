use crate::{apply_patch, Patch, StateError};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One committed patch together with the actor that produced it (a section
/// kind, the field editor, ...).
#[derive(Debug, Clone, Serialize)]
pub struct CommitRecord {
    pub source: String,
    pub patch: Patch,
}

/// The shared plan document.
///
/// The document is the single source of truth for plan content; everything
/// that changes it goes through [`commit`](PlanStore::commit). Clones share
/// the same document and history. Commits serialize on the write lock and
/// each one applies to the document as of that moment, so a patch built
/// from an old snapshot still lands on the latest document — last
/// completion wins per leaf.
#[derive(Debug, Clone)]
pub struct PlanStore {
    doc: Arc<RwLock<Value>>,
    history: Arc<RwLock<Vec<CommitRecord>>>,
}

impl PlanStore {
    pub fn new(seed: Value) -> Self {
        Self {
            doc: Arc::new(RwLock::new(seed)),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A snapshot of the current document. Later commits never mutate a
    /// snapshot already handed out.
    pub async fn snapshot(&self) -> Value {
        self.doc.read().await.clone()
    }

    /// Apply `patch` to the current document and swap in the result.
    ///
    /// On error the document is left exactly as it was and nothing is
    /// recorded.
    pub async fn commit(&self, source: &str, patch: Patch) -> Result<Value, StateError> {
        let mut doc = self.doc.write().await;
        let next = apply_patch(&doc, &patch)?;
        *doc = next;
        self.history.write().await.push(CommitRecord {
            source: source.to_string(),
            patch,
        });
        Ok(doc.clone())
    }

    /// Every commit of this session, oldest first.
    pub async fn history(&self) -> Vec<CommitRecord> {
        self.history.read().await.clone()
    }

    pub async fn history_len(&self) -> usize {
        self.history.read().await.len()
    }
}
