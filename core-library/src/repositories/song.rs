//! In-memory song catalog and download registry

use crate::error::{LibraryError, Result};
use async_trait::async_trait;
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::song::{Song, SongStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

const DEFAULT_DOWNLOAD_BASE_URL: &str = "memory://downloads";

/// Song catalog with a registry of downloaded songs.
///
/// Searching matches title or artist, case-insensitively, in catalog order.
/// Downloads are simulated: the returned location is
/// `<download_base_url>/<song id>`.
#[derive(Debug)]
pub struct MemorySongRepository {
    catalog: RwLock<Vec<Song>>,
    downloads: RwLock<HashMap<String, Song>>,
    download_base_url: String,
}

impl Default for MemorySongRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MemorySongRepository {
    pub fn new(catalog: Vec<Song>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            downloads: RwLock::new(HashMap::new()),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
        }
    }

    pub fn with_download_base_url(mut self, url: impl Into<String>) -> Self {
        self.download_base_url = url.into();
        self
    }

    /// Add a song to the catalog, replacing any entry with the same id
    pub async fn insert(&self, song: Song) {
        let mut catalog = self.catalog.write().await;
        match catalog.iter_mut().find(|s| s.id == song.id) {
            Some(existing) => *existing = song,
            None => catalog.push(song),
        }
    }

    /// Songs recorded through [`SongStore::add_downloaded_song`]
    pub async fn downloaded_songs(&self) -> Vec<Song> {
        let mut songs: Vec<Song> = self.downloads.read().await.values().cloned().collect();
        songs.sort_by(|a, b| a.id.cmp(&b.id));
        songs
    }

    fn matches(song: &Song, needle: &str) -> bool {
        song.title.to_lowercase().contains(needle)
            || song
                .artist
                .as_deref()
                .is_some_and(|artist| artist.to_lowercase().contains(needle))
    }

    async fn search(&self, key: &str, limit: usize) -> Result<Vec<Song>> {
        let needle = key.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LibraryError::InvalidInput {
                field: "key".to_string(),
                message: "Search key cannot be empty".to_string(),
            });
        }

        let catalog = self.catalog.read().await;
        let songs: Vec<Song> = catalog
            .iter()
            .filter(|song| Self::matches(song, &needle))
            .take(limit)
            .cloned()
            .collect();

        if songs.is_empty() {
            return Err(LibraryError::NotFound {
                entity_type: "Songs matching".to_string(),
                id: format!("\"{}\"", key.trim()),
            });
        }

        Ok(songs)
    }

    async fn download_location(&self, song: &Song) -> Result<String> {
        if !song.is_downloadable() {
            return Err(LibraryError::InvalidInput {
                field: "song".to_string(),
                message: format!("Song {} is not downloadable", song.id),
            });
        }

        let known = self.catalog.read().await.iter().any(|s| s.id == song.id);
        if !known {
            return Err(LibraryError::NotFound {
                entity_type: "Song".to_string(),
                id: song.id.clone(),
            });
        }

        Ok(format!(
            "{}/{}",
            self.download_base_url.trim_end_matches('/'),
            song.id
        ))
    }
}

#[async_trait]
impl SongStore for MemorySongRepository {
    #[instrument(skip(self, key), fields(key_len = key.len()))]
    async fn search_song(&self, key: &str, limit: usize) -> BridgeResult<Vec<Song>> {
        let songs = self.search(key, limit).await?;
        debug!(returned = songs.len(), "Catalog search finished");
        Ok(songs)
    }

    #[instrument(skip(self))]
    async fn get_song_by_id(&self, id: &str) -> BridgeResult<String> {
        match self.downloads.read().await.get(id) {
            Some(song) => Ok(format!("\"{}\" is already downloaded", song.title)),
            None => Err(LibraryError::NotFound {
                entity_type: "Downloaded song".to_string(),
                id: id.to_string(),
            }
            .into()),
        }
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn download(&self, song: &Song) -> BridgeResult<String> {
        let location = self.download_location(song).await.map_err(|e| {
            warn!(error = %e, "Download rejected");
            e
        })?;
        Ok(location)
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn add_downloaded_song(&self, song: &Song) -> BridgeResult<String> {
        if song.download_url().is_none() {
            return Err(LibraryError::InvalidInput {
                field: "download_url".to_string(),
                message: format!("Song {} has no download location", song.id),
            }
            .into());
        }

        self.downloads
            .write()
            .await
            .insert(song.id.clone(), song.clone());
        debug!("Recorded downloaded song");
        Ok(format!("Downloaded \"{}\"", song.title))
    }
}
