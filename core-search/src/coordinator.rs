//! # Search Coordinator
//!
//! Orchestrates the search screen: history, catalog search and downloads.
//!
//! ## Overview
//!
//! The `SearchCoordinator` sits between a [`SearchView`] and two host stores.
//! Every public operation issues one store request, awaits its single
//! completion and forwards the outcome to the view:
//! - Load, save and clear search history via `HistoryStore`
//! - Search the catalog via `SongStore` and keep the results as a [`Genre`]
//! - Download a song from the last results after probing whether it is
//!   already downloaded
//!
//! ## Workflow
//!
//! ### Download
//! 1. Resolve the song by index in the last result group (fails fast if there
//!    is none or the index is out of range)
//! 2. Probe `get_song_by_id`; a successful probe means the song is already
//!    downloaded and its message is shown through `show_error`
//! 3. On a failed probe, refuse non-downloadable songs with the configured
//!    message
//! 4. Download, attach the returned location to the song, then record it as
//!    downloaded and show the store's success message
//!
//! ## Concurrency
//!
//! Session state sits behind one `tokio::sync::Mutex`. The lock is taken for
//! short, synchronous updates only and is never held across a store call or a
//! view notification. Requests are not cancelled: a search that completes
//! after a newer one still replaces the result group.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_search::SearchCoordinator;
//! use std::sync::Arc;
//!
//! let coordinator = SearchCoordinator::new(history_store, song_store, view);
//! coordinator.start().await;
//!
//! coordinator.set_add_flag(true).await;
//! coordinator.submit_query("daft punk").await;
//! coordinator.save_recent_search().await;
//!
//! coordinator.prepare_download(0).await?;
//! ```

use crate::error::Result;
use crate::session::SessionState;
use bridge_traits::{History, HistoryStore, SearchView, Song, SongStore};
use core_library::Genre;
use core_runtime::config::{CoreConfig, SearchConfig};
use core_runtime::logging::{redact_if_sensitive, strip_location};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Coordinates one search screen.
pub struct SearchCoordinator {
    history_store: Arc<dyn HistoryStore>,
    song_store: Arc<dyn SongStore>,
    view: Arc<dyn SearchView>,
    config: SearchConfig,
    session: Mutex<SessionState>,
}

impl SearchCoordinator {
    /// Create a coordinator with the default [`SearchConfig`].
    pub fn new(
        history_store: Arc<dyn HistoryStore>,
        song_store: Arc<dyn SongStore>,
        view: Arc<dyn SearchView>,
    ) -> Self {
        Self::with_config(history_store, song_store, view, SearchConfig::default())
    }

    pub fn with_config(
        history_store: Arc<dyn HistoryStore>,
        song_store: Arc<dyn SongStore>,
        view: Arc<dyn SearchView>,
        config: SearchConfig,
    ) -> Self {
        Self {
            history_store,
            song_store,
            view,
            config,
            session: Mutex::new(SessionState::new()),
        }
    }

    /// Create a coordinator from a [`CoreConfig`], re-validating its search
    /// settings since they are public and may have been edited after build.
    pub fn from_config(config: CoreConfig) -> Result<Self> {
        config.search.validate()?;
        Ok(Self::with_config(
            config.history_store,
            config.song_store,
            config.view,
            config.search,
        ))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Load the default number of history entries.
    pub async fn start(&self) {
        self.load_history(self.config.history_limit).await;
    }

    /// Load up to `limit` history entries and show them.
    ///
    /// On failure the current history is kept and the error message is shown.
    #[instrument(skip(self))]
    pub async fn load_history(&self, limit: usize) {
        match self.history_store.get_histories(limit).await {
            Ok(histories) => {
                debug!(count = histories.len(), "Search history loaded");
                self.session.lock().await.histories = Some(histories.clone());
                self.view.show_search_history(Some(histories));
            }
            Err(err) => {
                warn!(error = %err, "Failed to load search history");
                self.view.show_error(err.message().to_string());
            }
        }
    }

    /// Search the catalog for `key` and show the results.
    ///
    /// The progress bar is hidden whatever the outcome. A successful search
    /// replaces the result group; a failed one leaves it as it was.
    #[instrument(skip(self, key), fields(query = %redact_if_sensitive("query", key)))]
    pub async fn load_search_result(&self, key: &str) {
        match self.song_store.search_song(key, self.config.search_limit).await {
            Ok(songs) => {
                info!(results = songs.len(), "Search finished");
                self.session.lock().await.result_group =
                    Some(Genre::new(self.config.result_label.clone(), songs.clone()));
                self.view.show_progress_bar(false);
                self.view.show_search_result(songs);
            }
            Err(err) => {
                warn!(error = %err, "Search failed");
                self.view.show_progress_bar(false);
                self.view.show_error(err.message().to_string());
            }
        }
    }

    /// Persist the recent-search buffer in one batch.
    ///
    /// The buffer is kept after a successful save, so saving twice sends the
    /// same entries twice.
    #[instrument(skip(self))]
    pub async fn save_recent_search(&self) {
        let batch = self.session.lock().await.recent_searches.clone();
        let count = batch.len();

        match self.history_store.save_histories(batch).await {
            Ok(()) => debug!(count, "Recent searches saved"),
            Err(err) => {
                warn!(error = %err, count, "Failed to save recent searches");
                self.view.show_error(err.message().to_string());
            }
        }
    }

    /// Clear the stored history and show the emptied list.
    ///
    /// If history was never loaded the view receives `None`.
    #[instrument(skip(self))]
    pub async fn clear_history(&self) {
        match self.history_store.clear_histories().await {
            Ok(()) => {
                let histories = {
                    let mut session = self.session.lock().await;
                    session.clear_histories();
                    session.histories.clone()
                };
                debug!(loaded = histories.is_some(), "Search history cleared");
                self.view.show_search_history(histories);
            }
            Err(err) => {
                warn!(error = %err, "Failed to clear search history");
                self.view.show_error(err.message().to_string());
            }
        }
    }

    /// Handle a query typed by the user.
    ///
    /// Remembers the query, records it into history when the add flag is set,
    /// shows the progress bar and runs the search.
    #[instrument(skip(self, text), fields(query = %redact_if_sensitive("query", text)))]
    pub async fn submit_query(&self, text: &str) {
        let recorded = {
            let mut session = self.session.lock().await;
            session.search_key = Some(text.to_string());
            session.record_query(text)
        };
        debug!(recorded, "Query submitted");

        self.view.show_progress_bar(true);
        self.load_search_result(text).await;
    }

    /// Set whether submitted queries are recorded into history.
    pub async fn set_add_flag(&self, add_to_history: bool) {
        self.session.lock().await.add_to_history = add_to_history;
    }

    pub async fn add_flag(&self) -> bool {
        self.session.lock().await.add_to_history
    }

    /// Start downloading the song at `index` in the last result group.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NoResultGroup`](crate::SearchError::NoResultGroup) if
    ///   no search has succeeded yet
    /// - [`SearchError::IndexOutOfRange`](crate::SearchError::IndexOutOfRange)
    ///   if `index` is past the end of the results
    ///
    /// Store failures are not errors here; they are reported to the view.
    #[instrument(skip(self))]
    pub async fn prepare_download(&self, index: usize) -> Result<()> {
        let song = self.session.lock().await.resolve_song(index)?;

        match self.song_store.get_song_by_id(&song.id).await {
            Ok(message) => {
                // The probe succeeding means the song is already downloaded.
                // Hosts display this on the error channel.
                debug!(song_id = %song.id, "Song already downloaded");
                self.view.show_error(message);
            }
            Err(_) if song.is_downloadable() => self.download(index, song).await,
            Err(_) => {
                debug!(song_id = %song.id, "Song is not downloadable");
                self.view
                    .show_error(self.config.download_disabled_message.clone());
            }
        }

        Ok(())
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn download(&self, index: usize, mut song: Song) {
        match self.song_store.download(&song).await {
            Ok(location) => {
                debug!(file = %strip_location(&location), "Download finished");
                song.set_download_url(location.as_str());
                let attached = self
                    .session
                    .lock()
                    .await
                    .attach_download_url(index, &song.id, &location);
                if !attached {
                    debug!("Result group changed while downloading");
                }
                self.save_download(&song).await;
            }
            Err(err) => {
                warn!(error = %err, "Download failed");
                self.view.show_error(err.message().to_string());
            }
        }
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn save_download(&self, song: &Song) {
        match self.song_store.add_downloaded_song(song).await {
            Ok(message) => {
                info!("Song recorded as downloaded");
                self.view.show_success(message);
            }
            Err(err) => {
                warn!(error = %err, "Failed to record downloaded song");
                self.view.show_error(err.message().to_string());
            }
        }
    }

    /// History currently shown, `None` until loaded.
    pub async fn histories(&self) -> Option<Vec<History>> {
        self.session.lock().await.histories.clone()
    }

    /// Append an entry to the shown history without touching the
    /// recent-search buffer.
    pub async fn add_search_key(&self, history: History) {
        self.session.lock().await.push_history(history);
    }

    /// Queries waiting for [`save_recent_search`](Self::save_recent_search).
    pub async fn recent_searches(&self) -> Vec<History> {
        self.session.lock().await.recent_searches.clone()
    }

    /// Result group of the last successful search.
    pub async fn result_group(&self) -> Option<Genre> {
        self.session.lock().await.result_group.clone()
    }

    pub async fn search_key(&self) -> Option<String> {
        self.session.lock().await.search_key.clone()
    }

    pub async fn set_search_key(&self, text: impl Into<String>) {
        self.session.lock().await.search_key = Some(text.into());
    }
}
