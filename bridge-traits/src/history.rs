//! Search History Abstractions
//!
//! Defines the search-term record and the store contract used to load,
//! persist and clear past searches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single past search term.
///
/// Records are immutable once created. Lists of records are ordered with the
/// most recent entry last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History {
    search_key: String,
}

impl History {
    pub fn new(search_key: impl Into<String>) -> Self {
        Self {
            search_key: search_key.into(),
        }
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

impl From<&str> for History {
    fn from(search_key: &str) -> Self {
        Self::new(search_key)
    }
}

/// Search history store
///
/// Persists past search terms on behalf of the search coordinator. Hosts back
/// this with their own database or remote service.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::history::{History, HistoryStore};
///
/// async fn remember(store: &dyn HistoryStore, query: &str) {
///     store.save_histories(vec![History::new(query)]).await.ok();
/// }
/// ```
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Fetch up to `limit` stored search terms, oldest first.
    async fn get_histories(&self, limit: usize) -> Result<Vec<History>>;

    /// Persist a batch of search terms in one call.
    async fn save_histories(&self, histories: Vec<History>) -> Result<()>;

    /// Remove every stored search term.
    async fn clear_histories(&self) -> Result<()>;
}
