//! Coarse relative-time formatting ("3 hours ago").

use std::time::Duration;

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;

/// Format an elapsed duration as a friendly "ago" string.
///
/// Exactly one bucket is used, largest first: days, hours, minutes,
/// then `"Just now"` for anything under a minute. Each unit is truncated,
/// never rounded, so 119 seconds is still "1 minute ago".
pub fn friendly_duration(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / SECONDS_PER_MINUTE;
    let hours = minutes / MINUTES_PER_HOUR;
    let days = hours / HOURS_PER_DAY;

    if days > 0 {
        ago(days, "day")
    } else if hours > 0 {
        ago(hours, "hour")
    } else if minutes > 0 {
        ago(minutes, "minute")
    } else {
        "Just now".to_string()
    }
}

/// Format the time elapsed between `then` and `now`.
///
/// A `then` in the future (clock skew between writer and reader) is
/// clamped to zero and reads as "Just now".
pub fn friendly_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).to_std().unwrap_or(Duration::ZERO);
    friendly_duration(elapsed)
}

fn ago(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
