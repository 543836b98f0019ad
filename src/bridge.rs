//! The bridge proper — a stateless request → translate → call → translate
//! pipeline over a [`NotificationCenter`].
//!
//! No state lives here: every operation builds its inputs from the incoming
//! request, forwards one native call, and converts the result. Idempotence
//! and identifier dedup are the native subsystem's business.

use std::fmt;
use std::sync::Arc;

use crate::center::{
    AuthorizationOptions, CalendarTrigger, InterruptionLevel, NotificationCenter,
    NotificationContent, NotificationRequest, NotificationSettings, Sound,
};
use crate::types::{Error, Result};

/// Translation layer between the message-channel protocol and the native
/// permission/scheduling API.
#[derive(Clone)]
pub struct NotificationBridge {
    center: Arc<dyn NotificationCenter>,
}

impl fmt::Debug for NotificationBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBridge").finish_non_exhaustive()
    }
}

impl NotificationBridge {
    pub fn new(center: Arc<dyn NotificationCenter>) -> Self {
        Self { center }
    }

    /// Query the current permission snapshot. Always succeeds.
    pub async fn get_notification_settings(&self) -> NotificationSettings {
        self.center.notification_settings().await
    }

    /// Translate option names and forward one combined authorization request.
    ///
    /// The whole name set is validated before the native layer is touched;
    /// the first unknown name fails the call with the offending entry named.
    /// Returns whether the user granted authorization.
    pub async fn request_authorization(&self, options: &[String]) -> Result<bool> {
        let options = AuthorizationOptions::from_names(options)?;
        self.center
            .request_authorization(options)
            .await
            .map_err(|e| Error::native(e.to_string()))
    }

    /// Build a notification request and register it with the scheduler.
    ///
    /// The timestamp must parse as a finite decimal; failure is a client
    /// error and the native layer is never contacted. A default sound is
    /// always attached, and the interruption level is elevated only when
    /// `time_sensitive` is set. Registering an identifier that is already
    /// pending replaces the existing request.
    pub async fn schedule_notification(
        &self,
        id: String,
        target_epoch_seconds: &str,
        content: NotificationContent,
        repeats: bool,
        time_sensitive: bool,
    ) -> Result<()> {
        let epoch: f64 = target_epoch_seconds
            .parse()
            .map_err(|_| invalid_target_epoch())?;
        let trigger =
            CalendarTrigger::from_epoch_seconds(epoch, repeats).ok_or_else(invalid_target_epoch)?;

        let request = NotificationRequest {
            id,
            content,
            trigger,
            sound: Some(Sound::Default),
            interruption_level: if time_sensitive {
                InterruptionLevel::TimeSensitive
            } else {
                InterruptionLevel::Active
            },
        };

        self.center
            .add_request(request)
            .await
            .map_err(|e| Error::native(e.to_string()))
    }

    /// Remove pending requests by identifier. Unknown identifiers are
    /// silently ignored; the call never fails and does not suspend.
    pub fn cancel_notifications(&self, ids: &[String]) {
        self.center.remove_pending(ids);
    }

    /// Query all pending requests. Always succeeds.
    pub async fn get_scheduled_notifications(&self) -> Vec<NotificationRequest> {
        self.center.pending_requests().await
    }
}

fn invalid_target_epoch() -> Error {
    Error::invalid_arguments("Invalid argument 'targetEpochSeconds' provided.")
}
