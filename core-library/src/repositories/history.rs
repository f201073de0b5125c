//! In-memory search history repository

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::history::{History, HistoryStore};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Search history kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryHistoryRepository {
    entries: RwLock<Vec<History>>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `entries`, oldest first
    pub fn with_entries(entries: Vec<History>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of every stored entry
    pub async fn entries(&self) -> Vec<History> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryRepository {
    /// Returns the newest `limit` entries, still oldest first.
    #[instrument(skip(self))]
    async fn get_histories(&self, limit: usize) -> Result<Vec<History>> {
        let entries = self.entries.read().await;
        let start = entries.len().saturating_sub(limit);
        let page = entries[start..].to_vec();
        debug!(returned = page.len(), stored = entries.len(), "Loaded search history");
        Ok(page)
    }

    #[instrument(skip(self, histories), fields(count = histories.len()))]
    async fn save_histories(&self, histories: Vec<History>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.extend(histories);
        debug!(stored = entries.len(), "Saved search history batch");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_histories(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        debug!(removed, "Cleared search history");
        Ok(())
    }
}
