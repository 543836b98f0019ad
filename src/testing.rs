//! In-process fake of the native subsystem.
//!
//! [`MemoryCenter`] models the native permission store and scheduler closely
//! enough for round-trip tests and for hosting the daemon without a device:
//! permission state transitions, replace-by-id on registration, and
//! silent-ignore on unknown cancellation identifiers.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::center::{
    AuthorizationOptions, AuthorizationStatus, CenterError, NotificationCenter,
    NotificationRequest, NotificationSettings, SettingState,
};

#[derive(Debug, Default)]
struct CenterState {
    authorization: Option<AuthorizationStatus>,
    granted: AuthorizationOptions,
    pending: Vec<NotificationRequest>,
    next_add_failure: Option<String>,
}

/// Fake native center backed by process memory.
///
/// Construct with [`MemoryCenter::granting`] or [`MemoryCenter::denying`] to
/// fix how authorization prompts resolve.
#[derive(Debug)]
pub struct MemoryCenter {
    grant: bool,
    state: Mutex<CenterState>,
}

impl MemoryCenter {
    /// A center whose permission prompts always succeed.
    pub fn granting() -> Self {
        Self::new(true)
    }

    /// A center whose permission prompts are always declined.
    pub fn denying() -> Self {
        Self::new(false)
    }

    fn new(grant: bool) -> Self {
        Self {
            grant,
            state: Mutex::new(CenterState::default()),
        }
    }

    /// Make the next `add_request` fail with the given native description.
    pub fn fail_next_add(&self, description: impl Into<String>) {
        self.lock_state().next_add_failure = Some(description.into());
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn setting_for(state: &CenterState, flag: AuthorizationOptions) -> SettingState {
        match state.authorization {
            Some(AuthorizationStatus::Authorized) | Some(AuthorizationStatus::Provisional)
                if state.granted.contains(flag) =>
            {
                SettingState::Enabled
            }
            None => SettingState::NotSupported,
            _ => SettingState::Disabled,
        }
    }
}

#[async_trait]
impl NotificationCenter for MemoryCenter {
    async fn notification_settings(&self) -> NotificationSettings {
        let state = self.lock_state();
        NotificationSettings {
            authorization_status: state
                .authorization
                .unwrap_or(AuthorizationStatus::NotDetermined),
            alert_setting: Self::setting_for(&state, AuthorizationOptions::ALERT),
            badge_setting: Self::setting_for(&state, AuthorizationOptions::BADGE),
            sound_setting: Self::setting_for(&state, AuthorizationOptions::SOUND),
            critical_alert_setting: Self::setting_for(&state, AuthorizationOptions::CRITICAL_ALERT),
            time_sensitive_setting: Self::setting_for(&state, AuthorizationOptions::ALERT),
            provides_app_notification_settings: state
                .granted
                .contains(AuthorizationOptions::PROVIDES_APP_NOTIFICATION_SETTINGS),
        }
    }

    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, CenterError> {
        let mut state = self.lock_state();
        if self.grant {
            state.authorization = Some(if options.contains(AuthorizationOptions::PROVISIONAL) {
                AuthorizationStatus::Provisional
            } else {
                AuthorizationStatus::Authorized
            });
            state.granted |= options;
            Ok(true)
        } else {
            state.authorization = Some(AuthorizationStatus::Denied);
            Ok(false)
        }
    }

    async fn add_request(&self, request: NotificationRequest) -> Result<(), CenterError> {
        let mut state = self.lock_state();
        if let Some(description) = state.next_add_failure.take() {
            return Err(CenterError(description));
        }
        // Implicit replace-by-id, matching native scheduler behavior.
        state.pending.retain(|pending| pending.id != request.id);
        state.pending.push(request);
        Ok(())
    }

    fn remove_pending(&self, ids: &[String]) {
        self.lock_state()
            .pending
            .retain(|pending| !ids.contains(&pending.id));
    }

    async fn pending_requests(&self) -> Vec<NotificationRequest> {
        self.lock_state().pending.clone()
    }
}
