//! # Host Bridge Traits
//!
//! Contracts between the search core and the host application.
//!
//! ## Overview
//!
//! The core never talks to a database, the network or the UI directly. Each
//! of those collaborators is reached through a trait defined here and
//! implemented by the host (Android, iOS, desktop) or by the in-memory
//! repositories in `core-library`.
//!
//! ## Traits
//!
//! - [`HistoryStore`](history::HistoryStore) - Load, persist and clear past searches
//! - [`SongStore`](song::SongStore) - Search the catalog, probe and download songs
//! - [`SearchView`](view::SearchView) - Presentation surface notified of outcomes
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! Store methods return [`BridgeError`](error::BridgeError), which carries
//! the host's human-readable message. The core forwards that message to the
//! view unchanged, so implementations should make it presentable.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`; the coordinator holds them behind `Arc`
//! and may await store calls from any runtime worker.

pub mod error;
pub mod history;
pub mod logging;
pub mod song;
pub mod view;

pub use error::BridgeError;

pub use history::{History, HistoryStore};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use song::{Song, SongStore};
pub use view::SearchView;
