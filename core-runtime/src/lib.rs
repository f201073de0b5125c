//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the search core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! Other crates depend on this one for their configuration types and for the
//! logging conventions shared across the workspace. Hosts call
//! [`logging::init_logging`] once at startup and build a
//! [`config::CoreConfig`] holding their bridge implementations.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, SearchConfig};
pub use error::{Error, Result};
