//! Permission snapshot types.

use serde::{Deserialize, Serialize};

/// Overall authorization state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Denied,
    Authorized,
    Provisional,
    Ephemeral,
}

impl AuthorizationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotDetermined => "notDetermined",
            Self::Denied => "denied",
            Self::Authorized => "authorized",
            Self::Provisional => "provisional",
            Self::Ephemeral => "ephemeral",
        }
    }
}

/// State of one capability in the user's current grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingState {
    NotSupported,
    Disabled,
    Enabled,
}

impl SettingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSupported => "notSupported",
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
        }
    }
}

/// Read-only snapshot of the user's current permission grants.
///
/// Produced by querying the native subsystem per call; never cached by the
/// bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub authorization_status: AuthorizationStatus,
    pub alert_setting: SettingState,
    pub badge_setting: SettingState,
    pub sound_setting: SettingState,
    pub critical_alert_setting: SettingState,
    pub time_sensitive_setting: SettingState,
    pub provides_app_notification_settings: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            authorization_status: AuthorizationStatus::NotDetermined,
            alert_setting: SettingState::NotSupported,
            badge_setting: SettingState::NotSupported,
            sound_setting: SettingState::NotSupported,
            critical_alert_setting: SettingState::NotSupported,
            time_sensitive_setting: SettingState::NotSupported,
            provides_app_notification_settings: false,
        }
    }
}
