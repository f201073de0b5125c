//! # Library Module
//!
//! Domain models shared by the search core and in-memory repositories that
//! implement the host store contracts.
//!
//! ## Overview
//!
//! This module provides:
//! - [`Genre`](models::Genre), the labelled group of songs produced by a search
//! - [`MemoryHistoryRepository`](repositories::MemoryHistoryRepository) and
//!   [`MemorySongRepository`](repositories::MemorySongRepository), reference
//!   stores for tests, demos and hosts without a persistence layer

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{LibraryError, Result};
pub use models::Genre;
pub use repositories::{MemoryHistoryRepository, MemorySongRepository};
