//! # Repository Implementations
//!
//! In-memory implementations of the host store contracts from
//! `bridge-traits`.
//!
//! ## Available Repositories
//!
//! - `MemoryHistoryRepository` - Ordered search history, most recent last
//! - `MemorySongRepository` - Song catalog plus a registry of downloaded songs
//!
//! Both keep their state behind a `tokio::sync::RwLock` and can be shared
//! across tasks through `Arc`.

pub mod history;
pub mod song;

pub use history::MemoryHistoryRepository;
pub use song::MemorySongRepository;
