//! Song Catalog Abstractions
//!
//! Defines the track record returned by searches and the store contract used
//! for searching, probing and downloading songs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A streamable, possibly downloadable track.
///
/// `download_url` starts unset and is filled in once a download completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Catalog identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Uploader or artist name
    pub artist: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: Option<i64>,
    /// Whether the catalog allows downloading this track
    pub downloadable: bool,
    /// Location of the downloaded file, once known
    pub download_url: Option<String>,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            duration_ms: None,
            downloadable: false,
            download_url: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_downloadable(mut self, downloadable: bool) -> Self {
        self.downloadable = downloadable;
        self
    }

    pub fn is_downloadable(&self) -> bool {
        self.downloadable
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn set_download_url(&mut self, url: impl Into<String>) {
        self.download_url = Some(url.into());
    }
}

/// Song store
///
/// Entry point to the song catalog and the local download registry.
///
/// Every method resolves exactly once. Success values that are plain strings
/// are host messages meant for display (or, for [`SongStore::download`], the
/// location of the downloaded file).
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Search the catalog, returning at most `limit` songs.
    async fn search_song(&self, key: &str, limit: usize) -> Result<Vec<Song>>;

    /// Probe whether a song is already known locally.
    ///
    /// Succeeds with a message when the song exists, fails otherwise.
    async fn get_song_by_id(&self, id: &str) -> Result<String>;

    /// Download a song, returning the location of the stored file.
    async fn download(&self, song: &Song) -> Result<String>;

    /// Record a song as downloaded.
    async fn add_downloaded_song(&self, song: &Song) -> Result<String>;
}
