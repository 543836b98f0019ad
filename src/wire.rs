//! Wire-format projection — domain types → string-keyed maps.
//!
//! The message channel exchanges string/primitive-keyed mappings; these
//! conversions are the only place the wire shapes are spelled out.

use serde_json::Value;

use crate::center::{InterruptionLevel, NotificationRequest, NotificationSettings};

/// Project a permission snapshot to the settings record: every value a
/// string, keys as the application-side client expects them.
pub fn settings_to_value(settings: &NotificationSettings) -> Value {
    serde_json::json!({
        "authorizationStatus": settings.authorization_status.as_str(),
        "alertSetting": settings.alert_setting.as_str(),
        "badgeSetting": settings.badge_setting.as_str(),
        "soundSetting": settings.sound_setting.as_str(),
        "criticalAlertSetting": settings.critical_alert_setting.as_str(),
        "timeSensitiveSetting": settings.time_sensitive_setting.as_str(),
        "providesAppNotificationSettings":
            settings.provides_app_notification_settings.to_string(),
    })
}

/// Project a pending request to the scheduled-notification record.
///
/// `targetEpochSeconds` is reassembled from the trigger's calendar components
/// in the local calendar; a component set with no valid local instant (DST
/// gap) projects as the empty string rather than failing the listing.
pub fn request_to_value(request: &NotificationRequest) -> Value {
    let target_epoch = request
        .trigger
        .epoch_seconds()
        .map(|secs| secs.to_string())
        .unwrap_or_default();

    serde_json::json!({
        "id": request.id,
        "title": request.content.title,
        "subtitle": request.content.subtitle,
        "body": request.content.body,
        "targetEpochSeconds": target_epoch,
        "repeats": request.trigger.repeats,
        "timeSensitive": request.interruption_level == InterruptionLevel::TimeSensitive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::{
        AuthorizationStatus, CalendarTrigger, NotificationContent, SettingState, Sound,
    };

    #[test]
    fn settings_record_is_all_strings() {
        let settings = NotificationSettings {
            authorization_status: AuthorizationStatus::Authorized,
            alert_setting: SettingState::Enabled,
            badge_setting: SettingState::Disabled,
            sound_setting: SettingState::Enabled,
            critical_alert_setting: SettingState::NotSupported,
            time_sensitive_setting: SettingState::NotSupported,
            provides_app_notification_settings: false,
        };

        let value = settings_to_value(&settings);
        let map = value.as_object().unwrap();
        assert!(map.values().all(Value::is_string));
        assert_eq!(map["authorizationStatus"], "authorized");
        assert_eq!(map["badgeSetting"], "disabled");
        assert_eq!(map["providesAppNotificationSettings"], "false");
    }

    #[test]
    fn record_reports_missing_content_as_empty_strings() {
        let request = NotificationRequest {
            id: "r1".into(),
            content: NotificationContent {
                title: "Stand-up".into(),
                ..Default::default()
            },
            trigger: CalendarTrigger::from_epoch_seconds(1_700_000_000.0, true).unwrap(),
            sound: Some(Sound::Default),
            interruption_level: InterruptionLevel::Active,
        };

        let value = request_to_value(&request);
        assert_eq!(value["id"], "r1");
        assert_eq!(value["title"], "Stand-up");
        assert_eq!(value["subtitle"], "");
        assert_eq!(value["body"], "");
        assert_eq!(value["targetEpochSeconds"], "1700000000");
        assert_eq!(value["repeats"], true);
        assert_eq!(value["timeSensitive"], false);
    }
}
