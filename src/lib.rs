//! Workspace placeholder crate.
//!
//! This crate exposes feature flags that map to the individual workspace
//! crates. Host applications can depend on `tune-core-workspace` and enable
//! the features they need without wiring each crate individually:
//!
//! - `search` (default): the search coordinator from `core-search`
//! - `memory-repositories`: in-memory history and song stores from
//!   `core-library`

#[cfg(feature = "search")]
pub use core_search::{SearchCoordinator, SearchError};

#[cfg(feature = "memory-repositories")]
pub use core_library::{MemoryHistoryRepository, MemorySongRepository};
