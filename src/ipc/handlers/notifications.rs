//! Notifications service handler — the five bridge operations.

use serde_json::Value;

use crate::bridge::NotificationBridge;
use crate::center::NotificationContent;
use crate::ipc::dispatch::{bool_field, str_field, str_list_field};
use crate::types::{Error, Result};
use crate::wire;

pub async fn handle(bridge: &NotificationBridge, method: &str, body: Value) -> Result<Value> {
    match method {
        "GetNotificationSettings" => {
            let settings = bridge.get_notification_settings().await;
            Ok(wire::settings_to_value(&settings))
        }

        "RequestAuthorization" => {
            let options = str_list_field(&body, "options")?;
            let granted = bridge.request_authorization(&options).await?;
            Ok(Value::Bool(granted))
        }

        "ScheduleNotification" => {
            let id = str_field(&body, "id")?;
            let target_epoch_seconds = str_field(&body, "targetEpochSeconds")?;
            let content = parse_content(&body)?;
            let repeats = bool_field(&body, "repeats");
            let time_sensitive = bool_field(&body, "timeSensitive");

            bridge
                .schedule_notification(id, &target_epoch_seconds, content, repeats, time_sensitive)
                .await?;
            Ok(Value::Null)
        }

        "CancelNotifications" => {
            let ids = str_list_field(&body, "ids")?;
            bridge.cancel_notifications(&ids);
            Ok(Value::Null)
        }

        "GetScheduledNotifications" => {
            let records: Vec<Value> = bridge
                .get_scheduled_notifications()
                .await
                .iter()
                .map(wire::request_to_value)
                .collect();
            Ok(Value::Array(records))
        }

        _ => Err(Error::not_found(format!(
            "Unknown notifications method: {}",
            method
        ))),
    }
}

/// Content is an optional mapping; absent fields default to empty strings.
fn parse_content(body: &Value) -> Result<NotificationContent> {
    match body.get("content") {
        Some(value) if !value.is_null() => serde_json::from_value(value.clone())
            .map_err(|_| Error::invalid_arguments("Invalid argument 'content' provided.")),
        _ => Ok(NotificationContent::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults_when_absent() {
        let body = serde_json::json!({"id": "n1"});
        assert_eq!(parse_content(&body).unwrap(), NotificationContent::default());
    }

    #[test]
    fn content_rejects_non_mapping() {
        let body = serde_json::json!({"content": "title-only"});
        let err = parse_content(&body).unwrap_err();
        assert_eq!(err.to_wire_code(), "InvalidArguments");
    }
}
