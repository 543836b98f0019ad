//! Authorization capability flags.

use bitflags::bitflags;

use crate::types::{Error, Result};

bitflags! {
    /// Capabilities an application may request from the permission store.
    ///
    /// Each named option maps to exactly one native permission bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AuthorizationOptions: u8 {
        const BADGE = 1 << 0;
        const SOUND = 1 << 1;
        const ALERT = 1 << 2;
        const CRITICAL_ALERT = 1 << 3;
        const PROVIDES_APP_NOTIFICATION_SETTINGS = 1 << 4;
        const PROVISIONAL = 1 << 5;
    }
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl AuthorizationOptions {
    /// Exact-match lookup of a single option name.
    ///
    /// Named `from_option_name` rather than `from_name` to avoid colliding with
    /// the inherent `from_name` that the `bitflags!` macro generates (which keys
    /// on the SCREAMING_CASE const identifiers, not these camelCase wire names).
    pub fn from_option_name(name: &str) -> Option<Self> {
        match name {
            "badge" => Some(Self::BADGE),
            "sound" => Some(Self::SOUND),
            "alert" => Some(Self::ALERT),
            "criticalAlert" => Some(Self::CRITICAL_ALERT),
            "providesAppNotificationSettings" => Some(Self::PROVIDES_APP_NOTIFICATION_SETTINGS),
            "provisional" => Some(Self::PROVISIONAL),
            _ => None,
        }
    }

    /// Translate a list of option names into one combined flag set.
    ///
    /// The whole list is validated before anything reaches the native layer;
    /// the first unknown name fails the call and names the offending entry.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::empty();
        for name in names {
            let name = name.as_ref();
            options |= Self::from_option_name(name).ok_or_else(|| {
                Error::invalid_arguments(format!(
                    "Invalid option '{}' provided in argument 'options'.",
                    name
                ))
            })?;
        }
        Ok(options)
    }
}
