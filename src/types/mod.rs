//! Core types for the herald bridge.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives and the
//!   wire-code mapping used by the message channel
//! - **Config**: Configuration structures for the server and transport

mod config;
mod errors;

pub use config::{Config, IpcConfig, ObservabilityConfig, ServerConfig};
pub use errors::{Error, Result};
