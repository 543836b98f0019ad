//! Notification payload types.

use serde::{Deserialize, Serialize};

/// User-visible notification fields.
///
/// All fields are optional on the wire and default to the empty string when
/// absent from the input mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

/// Sound played when the notification fires.
///
/// The bridge always attaches [`Sound::Default`]; named sounds exist on the
/// native side but are not reachable through the schedule operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Default,
    Named(String),
}

/// How aggressively the notification may interrupt the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterruptionLevel {
    #[default]
    Active,
    TimeSensitive,
}
