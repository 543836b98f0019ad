//! Calendar-component trigger construction.

use chrono::{Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Condition that causes a scheduled notification to fire: a match on local
/// calendar components, not an elapsed interval.
///
/// All six components are always populated here, so a trigger with
/// `repeats = true` recurs annually on the matched date and time. Which
/// wall-clock instant the components denote depends on the host's local
/// calendar and timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTrigger {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub repeats: bool,
}

impl CalendarTrigger {
    /// Break an absolute epoch timestamp into local calendar components.
    ///
    /// Returns `None` for non-finite values or timestamps outside the
    /// representable calendar range. Sub-second precision is dropped; the
    /// native subsystem matches at second granularity.
    pub fn from_epoch_seconds(epoch_seconds: f64, repeats: bool) -> Option<Self> {
        if !epoch_seconds.is_finite() {
            return None;
        }
        let local = Local.timestamp_opt(epoch_seconds.trunc() as i64, 0).single()?;
        Some(Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            repeats,
        })
    }

    /// Reassemble the epoch timestamp the components denote in the local
    /// calendar. `None` if the combination is invalid or ambiguous (e.g. a
    /// wall-clock time skipped by a DST transition).
    pub fn epoch_seconds(&self) -> Option<i64> {
        Local
            .with_ymd_and_hms(
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                self.second,
            )
            .single()
            .map(|dt| dt.timestamp())
    }
}
