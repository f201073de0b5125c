//! Search Screen Abstraction
//!
//! The presentation surface the search coordinator reports to. Calls are
//! fire-and-forget notifications; the host decides how and on which thread
//! to render them.

use crate::history::History;
use crate::song::Song;

/// Search view sink
///
/// Hosts typically post each call onto their UI thread.
pub trait SearchView: Send + Sync {
    /// Show the search history. `None` means history has never been loaded.
    fn show_search_history(&self, histories: Option<Vec<History>>);

    fn show_search_result(&self, songs: Vec<Song>);

    fn show_progress_bar(&self, visible: bool);

    fn show_error(&self, message: String);

    fn show_success(&self, message: String);
}
