//! Domain models for search results

use bridge_traits::song::Song;
use serde::{Deserialize, Serialize};

/// A labelled, ordered group of songs.
///
/// The search coordinator builds a fresh group from every successful search;
/// groups are replaced, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    name: String,
    songs: Vec<Song>,
}

impl Genre {
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            name: name.into(),
            songs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn song_mut(&mut self, index: usize) -> Option<&mut Song> {
        self.songs.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn into_songs(self) -> Vec<Song> {
        self.songs
    }
}
