//! # Herald — local-notification bridge
//!
//! A thin bridge exposing the host's local-notification subsystem to an
//! application runtime over a binary message channel: requesting permission,
//! scheduling calendar-based notifications, listing pending ones, and
//! cancelling them by identifier.
//!
//! ## Architecture
//!
//! Every operation is a stateless pipeline; the native subsystem owns all
//! durable state (granted permissions, pending requests):
//! ```text
//!   request ──► translate ──► native call ──► translate ──► response
//!   (msgpack     (options,     (NotificationCenter)  (wire
//!    frame)       trigger)                            records)
//! ```
//!
//! The [`center::NotificationCenter`] trait is the seam to the platform
//! binding; [`bridge::NotificationBridge`] performs the translation;
//! [`ipc`] carries the request/response protocol over TCP.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod bridge;
pub mod center;
pub mod ipc;
pub mod types;
pub mod wire;

// Internal utilities
pub mod observability;

// Test support (fake native center)
#[cfg(feature = "test-harness")]
pub mod testing;

pub use bridge::NotificationBridge;
pub use types::{Config, Error, IpcConfig, Result};
