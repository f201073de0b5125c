//! # Core Configuration Module
//!
//! Configuration for the search core.
//!
//! ## Overview
//!
//! Two layers:
//! - [`SearchConfig`] holds plain settings (limits, labels, user-facing
//!   messages). It is `serde`-friendly so hosts can ship it inside their own
//!   settings files; missing keys fall back to defaults.
//! - [`CoreConfig`] bundles a `SearchConfig` with the host bridges the
//!   coordinator needs. It is built through [`CoreConfigBuilder`], which
//!   fails fast with an actionable error when a bridge is missing.
//!
//! ## Required Dependencies
//!
//! - `HistoryStore` - Persistence for past searches
//! - `SongStore` - Catalog search and downloads
//! - `SearchView` - Presentation surface
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::{CoreConfig, SearchConfig};
//! use std::sync::Arc;
//!
//! let search = SearchConfig::from_json(r#"{ "history_limit": 20 }"#)?;
//! let config = CoreConfig::builder()
//!     .history_store(Arc::new(MyHistoryStore))
//!     .song_store(Arc::new(MySongStore))
//!     .view(Arc::new(MySearchScreen))
//!     .search(search)
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{HistoryStore, SearchView, SongStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of history entries loaded when the search screen starts.
pub const DEFAULT_HISTORY_LIMIT: usize = 12;

/// Maximum number of songs requested per search.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Label given to the result group built from a search.
pub const DEFAULT_RESULT_LABEL: &str = "SEARCH";

/// Shown when the user asks to download a song the catalog marks as
/// not downloadable.
pub const DEFAULT_DOWNLOAD_DISABLED_MESSAGE: &str = "YOU CANNOT DOWNLOAD THIS SONG!";

/// Upper bound accepted for either limit.
const MAX_LIMIT: usize = 500;

/// Settings consumed by the search coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// History entries requested by `start()`
    pub history_limit: usize,

    /// Songs requested per search
    pub search_limit: usize,

    /// Label of the result group built from each successful search
    pub result_label: String,

    /// Message shown for songs that cannot be downloaded
    pub download_disabled_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
            result_label: DEFAULT_RESULT_LABEL.to_string(),
            download_disabled_message: DEFAULT_DOWNLOAD_DISABLED_MESSAGE.to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a JSON document, filling absent keys with defaults, then validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid search configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_result_label(mut self, label: impl Into<String>) -> Self {
        self.result_label = label.into();
        self
    }

    pub fn with_download_disabled_message(mut self, message: impl Into<String>) -> Self {
        self.download_disabled_message = message.into();
        self
    }

    /// Validates the settings.
    ///
    /// This checks:
    /// - Both limits are within `1..=500`
    /// - The result label is not blank
    /// - The download-disabled message is not blank
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 || self.history_limit > MAX_LIMIT {
            return Err(Error::Config(format!(
                "History limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.history_limit
            )));
        }

        if self.search_limit == 0 || self.search_limit > MAX_LIMIT {
            return Err(Error::Config(format!(
                "Search limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.search_limit
            )));
        }

        if self.result_label.trim().is_empty() {
            return Err(Error::Config("Result label cannot be empty".to_string()));
        }

        if self.download_disabled_message.trim().is_empty() {
            return Err(Error::Config(
                "Download-disabled message cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Everything the search coordinator needs to start.
#[derive(Clone)]
pub struct CoreConfig {
    /// Persistence for past searches (required)
    pub history_store: Arc<dyn HistoryStore>,

    /// Catalog search and downloads (required)
    pub song_store: Arc<dyn SongStore>,

    /// Presentation surface (required)
    pub view: Arc<dyn SearchView>,

    pub search: SearchConfig,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("history_store", &"HistoryStore { ... }")
            .field("song_store", &"SongStore { ... }")
            .field("view", &"SearchView { ... }")
            .field("search", &self.search)
            .finish()
    }
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

fn history_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "HistoryStore".to_string(),
        message: "HistoryStore implementation is required for search history persistence. \
                  Inject the platform history database, or use MemoryHistoryRepository \
                  from core-library for tests and demos."
            .to_string(),
    }
}

fn song_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "SongStore".to_string(),
        message: "SongStore implementation is required for catalog search and downloads. \
                  Inject the platform song repository, or use MemorySongRepository \
                  from core-library for tests and demos."
            .to_string(),
    }
}

fn view_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "SearchView".to_string(),
        message: "SearchView implementation is required to present search outcomes. \
                  Inject the screen that hosts the search UI."
            .to_string(),
    }
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    history_store: Option<Arc<dyn HistoryStore>>,
    song_store: Option<Arc<dyn SongStore>>,
    view: Option<Arc<dyn SearchView>>,
    search: Option<SearchConfig>,
}

impl CoreConfigBuilder {
    /// Sets the history store implementation (required).
    pub fn history_store(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.history_store = Some(store);
        self
    }

    /// Sets the song store implementation (required).
    pub fn song_store(mut self, store: Arc<dyn SongStore>) -> Self {
        self.song_store = Some(store);
        self
    }

    /// Sets the view sink (required).
    pub fn view(mut self, view: Arc<dyn SearchView>) -> Self {
        self.view = Some(view);
        self
    }

    /// Overrides the default [`SearchConfig`].
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = Some(search);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] when a required bridge was not provided
    /// - [`Error::Config`] when the search settings are invalid
    pub fn build(self) -> Result<CoreConfig> {
        let history_store = self.history_store.ok_or_else(history_store_missing_error)?;
        let song_store = self.song_store.ok_or_else(song_store_missing_error)?;
        let view = self.view.ok_or_else(view_missing_error)?;

        let search = self.search.unwrap_or_default();
        search.validate()?;

        Ok(CoreConfig {
            history_store,
            song_store,
            view,
            search,
        })
    }
}
