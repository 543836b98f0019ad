//! Native-subsystem seam.
//!
//! The host operating system owns all durable notification state: granted
//! permissions and pending requests. [`NotificationCenter`] is the trait the
//! bridge calls through; the embedding runtime supplies the platform binding,
//! and [`crate::testing::MemoryCenter`] supplies an in-process fake.

mod content;
mod options;
mod settings;
mod trigger;

pub use content::{InterruptionLevel, NotificationContent, Sound};
pub use options::AuthorizationOptions;
pub use settings::{AuthorizationStatus, NotificationSettings, SettingState};
pub use trigger::CalendarTrigger;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the native subsystem after a call was made.
///
/// Carries the native description; the bridge forwards it verbatim.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CenterError(pub String);

/// One notification request, as registered (or to be registered) with the
/// native scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Unique identifier; registering the same identifier again replaces the
    /// existing pending request.
    pub id: String,
    pub content: NotificationContent,
    pub trigger: CalendarTrigger,
    pub sound: Option<Sound>,
    pub interruption_level: InterruptionLevel,
}

/// The host's notification permission store and scheduler.
///
/// Calls that touch the native layer suspend until the native callback
/// resolves. The native subsystem applies its own concurrency control and
/// identifier dedup rules; implementations must not be second-guessed by
/// callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Current permission snapshot. Cannot fail.
    async fn notification_settings(&self) -> NotificationSettings;

    /// Request the given capabilities from the permission store, prompting
    /// the user if needed. Returns whether authorization was granted.
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, CenterError>;

    /// Register a request with the scheduler, replacing any pending request
    /// with the same identifier.
    async fn add_request(&self, request: NotificationRequest) -> Result<(), CenterError>;

    /// Remove pending requests matching the identifiers. Unknown identifiers
    /// are ignored. Does not suspend.
    fn remove_pending(&self, ids: &[String]);

    /// All currently pending requests.
    async fn pending_requests(&self) -> Vec<NotificationRequest>;
}
