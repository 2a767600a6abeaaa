use serde::Serialize;
use time::{Date, Duration, OffsetDateTime};

pub const DAY_WINDOW_LEN: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub label: String,
    pub date: Date,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotDescriptor {
    pub start: String,
    pub display: String,
}

/// Rolling booking window: today plus the next six days. The window is fixed
/// at generation time; callers decide when "today" is sampled.
pub fn day_window(today: Date) -> Vec<DayEntry> {
    (0..DAY_WINDOW_LEN as i64)
        .map(|i| {
            let date = today + Duration::days(i);
            DayEntry {
                label: date.to_string(),
                date,
            }
        })
        .collect()
}

/// Fixed daily catalog: hourly slots 08:00 through 23:00, then the single
/// post-midnight 00:00-01:00 slot. 17 entries, order must not change.
pub fn slot_catalog() -> Vec<SlotDescriptor> {
    let mut slots: Vec<SlotDescriptor> = (8..24)
        .map(|h| SlotDescriptor {
            start: format!("{h:02}:00"),
            display: format!("{h:02}:00-{:02}:00", (h + 1) % 24),
        })
        .collect();
    slots.push(SlotDescriptor {
        start: "00:00".to_string(),
        display: "00:00-01:00".to_string(),
    });
    slots
}

/// Start label "HH:00" to an hour, rejecting anything off the hour.
pub fn parse_start_label(start: &str) -> Option<u8> {
    let (hour, minute) = start.split_once(':')?;
    if hour.len() != 2 || minute != "00" {
        return None;
    }
    let hour: u8 = hour.parse().ok()?;
    if hour < 24 {
        Some(hour)
    } else {
        None
    }
}

/// Concrete UTC bounds of a slot on a given date. The 00:00 slot stays on the
/// same calendar date, matching how submissions were built upstream.
pub fn slot_bounds(date: Date, start: &str) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let hour = parse_start_label(start)?;
    let start_time = date.with_hms(hour, 0, 0).ok()?.assume_utc();
    Some((start_time, start_time + Duration::hours(1)))
}
