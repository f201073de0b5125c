//! # Search Module
//!
//! Coordinates song search, search-history persistence and download
//! initiation between a search screen and the host stores.
//!
//! ## Overview
//!
//! The [`SearchCoordinator`] owns the transient state of one search screen
//! (last query, current history list, pending recent searches, last result
//! group) and delegates every operation to the host bridges:
//! - `HistoryStore` for loading, saving and clearing past searches
//! - `SongStore` for catalog search, the already-downloaded probe and downloads
//! - `SearchView` for reporting results, progress, errors and successes
//!
//! Store failures are never retried; their message is handed to the view
//! as-is.
//!
//! ## Components
//!
//! - **Coordinator** (`coordinator`): the public operations
//! - **Session State** (`session`): state owned by one coordinator instance

pub mod coordinator;
pub mod error;
mod session;

pub use coordinator::SearchCoordinator;
pub use error::{Result, SearchError};
