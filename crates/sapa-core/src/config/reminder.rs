use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::error::SapaError;

/// Weekly workout reminder config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Chat that receives the reminder. `None` = the chat that runs `/reminder`.
    #[serde(default)]
    pub target_user: Option<i64>,
    /// Local firing time, `HH:MM`.
    #[serde(default = "default_reminder_time")]
    pub time: String,
    /// `UTC`, `±HH:MM`, or a supported Indonesian IANA zone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            target_user: None,
            time: default_reminder_time(),
            timezone: default_timezone(),
        }
    }
}

impl ReminderConfig {
    /// Parsed `(hour, minute)` of the firing time.
    pub fn hour_minute(&self) -> Result<(u32, u32), SapaError> {
        parse_hour_minute(&self.time)
    }

    /// Parsed timezone offset.
    pub fn offset(&self) -> Result<FixedOffset, SapaError> {
        parse_timezone(&self.timezone)
    }
}

/// Parse `HH:MM` (24-hour clock).
pub fn parse_hour_minute(s: &str) -> Result<(u32, u32), SapaError> {
    let invalid = || SapaError::Config(format!("invalid reminder time '{s}' (expected HH:MM)"));
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Parse a timezone into a fixed UTC offset.
///
/// Indonesian zones have no daylight saving time, so a fixed offset is exact for them.
pub fn parse_timezone(s: &str) -> Result<FixedOffset, SapaError> {
    let name = s.trim();
    let secs = match name {
        "UTC" | "Etc/UTC" | "Z" => 0,
        "Asia/Jakarta" | "Asia/Pontianak" => 7 * 3600,
        "Asia/Makassar" => 8 * 3600,
        "Asia/Jayapura" => 9 * 3600,
        _ => parse_offset_secs(name).ok_or_else(|| {
            SapaError::Config(format!(
                "unknown timezone '{name}' (use UTC, ±HH:MM, or Asia/Jakarta, \
                 Asia/Pontianak, Asia/Makassar, Asia/Jayapura)"
            ))
        })?,
    };
    FixedOffset::east_opt(secs)
        .ok_or_else(|| SapaError::Config(format!("timezone offset out of range: '{name}'")))
}

/// Parse `+HH:MM` / `-HH:MM` into seconds east of UTC.
fn parse_offset_secs(s: &str) -> Option<i32> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (h, m) = rest.split_once(':')?;
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}
