//! Relative date labels

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

const DAY_MS: i64 = 1000 * 60 * 60 * 24;

/// Reference point for date labels: current instant and the viewer's offset
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl Clock {
    /// Browser clock and local UTC offset
    pub fn local() -> Self {
        let now = Local::now();
        Self {
            now: now.with_timezone(&Utc),
            offset: now.offset().fix(),
        }
    }

    pub fn fixed(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    pub fn label(&self, timestamp: DateTime<Utc>) -> String {
        format_relative_date(timestamp, self.now, self.offset)
    }
}

/// Whole days between two instants, rounded up
pub fn day_difference(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff_ms = (now - timestamp).num_milliseconds().abs();
    (diff_ms + DAY_MS - 1) / DAY_MS
}

/// "Yesterday at HH:MM" for 1 day, "N days ago" below 7, full date otherwise
pub fn format_relative_date(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> String {
    let local = timestamp.with_timezone(&offset);
    match day_difference(timestamp, now) {
        1 => format!("Yesterday at {}", local.format("%H:%M")),
        days if days < 7 => format!("{} days ago", days),
        _ => local.format("%-m/%-d/%Y at %H:%M").to_string(),
    }
}
