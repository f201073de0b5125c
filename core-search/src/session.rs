//! # Session State
//!
//! Transient state of one search screen. Owned by a single
//! [`SearchCoordinator`](crate::SearchCoordinator) and never shared.

use crate::error::{Result, SearchError};
use bridge_traits::{History, Song};
use core_library::Genre;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Last submitted query text
    pub search_key: Option<String>,

    /// History shown on screen; `None` until loaded from the store
    pub histories: Option<Vec<History>>,

    /// Queries recorded while the add flag was set, awaiting a batch save
    pub recent_searches: Vec<History>,

    /// Songs from the last successful search
    pub result_group: Option<Genre>,

    /// Whether submitted queries are recorded into history
    pub add_to_history: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query to both the recent-search buffer and the visible
    /// history, but only while the add flag is set. Returns whether the query
    /// was recorded.
    pub fn record_query(&mut self, text: &str) -> bool {
        if !self.add_to_history {
            return false;
        }

        let history = History::new(text);
        self.recent_searches.push(history.clone());
        self.push_history(history);
        true
    }

    /// Append to the visible history, starting a new list if none was loaded.
    pub fn push_history(&mut self, history: History) {
        self.histories.get_or_insert_with(Vec::new).push(history);
    }

    /// Empty the visible history in place. An unloaded history stays absent.
    pub fn clear_histories(&mut self) {
        if let Some(histories) = self.histories.as_mut() {
            histories.clear();
        }
    }

    /// Clone of the song at `index` in the current result group.
    pub fn resolve_song(&self, index: usize) -> Result<Song> {
        let group = self
            .result_group
            .as_ref()
            .ok_or(SearchError::NoResultGroup)?;

        group
            .song(index)
            .cloned()
            .ok_or(SearchError::IndexOutOfRange {
                index,
                len: group.len(),
            })
    }

    /// Store a download location on the song at `index`, provided the group
    /// still holds the song with `song_id` there. A newer search may have
    /// replaced the group while the download was in flight.
    pub fn attach_download_url(&mut self, index: usize, song_id: &str, url: &str) -> bool {
        match self
            .result_group
            .as_mut()
            .and_then(|group| group.song_mut(index))
        {
            Some(song) if song.id == song_id => {
                song.set_download_url(url);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Genre {
        Genre::new(
            "SEARCH",
            vec![Song::new("a", "Alpha"), Song::new("b", "Beta")],
        )
    }

    #[test]
    fn test_record_query_requires_add_flag() {
        let mut state = SessionState::new();
        assert!(!state.record_query("hello"));
        assert!(state.recent_searches.is_empty());
        assert!(state.histories.is_none());

        state.add_to_history = true;
        assert!(state.record_query("hello"));
        assert_eq!(state.recent_searches, vec![History::new("hello")]);
        assert_eq!(state.histories, Some(vec![History::new("hello")]));
    }

    #[test]
    fn test_record_query_appends_after_loaded_history() {
        let mut state = SessionState {
            histories: Some(vec![History::new("old")]),
            add_to_history: true,
            ..SessionState::default()
        };

        state.record_query("new");
        assert_eq!(
            state.histories,
            Some(vec![History::new("old"), History::new("new")])
        );
    }

    #[test]
    fn test_clear_keeps_absent_history_absent() {
        let mut state = SessionState::new();
        state.clear_histories();
        assert!(state.histories.is_none());

        state.histories = Some(vec![History::new("x")]);
        state.clear_histories();
        assert_eq!(state.histories, Some(Vec::new()));
    }

    #[test]
    fn test_resolve_song_without_results() {
        let state = SessionState::new();
        assert!(matches!(
            state.resolve_song(0),
            Err(SearchError::NoResultGroup)
        ));
    }

    #[test]
    fn test_resolve_song_out_of_range() {
        let state = SessionState {
            result_group: Some(group()),
            ..SessionState::default()
        };

        assert_eq!(state.resolve_song(1).unwrap().id, "b");
        assert!(matches!(
            state.resolve_song(2),
            Err(SearchError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_attach_download_url_checks_identity() {
        let mut state = SessionState {
            result_group: Some(group()),
            ..SessionState::default()
        };

        assert!(!state.attach_download_url(0, "b", "memory://b"));
        assert!(state.attach_download_url(1, "b", "memory://b"));

        let group = state.result_group.unwrap();
        assert_eq!(group.songs()[0].download_url(), None);
        assert_eq!(group.songs()[1].download_url(), Some("memory://b"));
    }
}
