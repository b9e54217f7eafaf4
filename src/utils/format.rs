//! Formatting utilities for dates, durations and sizes.

use std::time::Duration;

use crate::config::MS_PER_SECOND;

const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar fields of a Unix timestamp (UTC).
struct Civil {
    year: i64,
    month: usize,
    day: i64,
    weekday: usize,
}

fn civil_from_days(days: i64) -> Civil {
    let weekday = days.rem_euclid(7) as usize;
    let mut year = 1970i64;
    let mut remaining_days = days;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    Civil {
        year,
        month,
        day: remaining_days + 1,
        weekday,
    }
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format a Unix timestamp in milliseconds the way `date` prints it
/// (e.g. "Mon Oct 19 2026 14:03:27 UTC").
pub fn format_date(unix_ms: u64) -> String {
    let secs = unix_ms / MS_PER_SECOND;
    let civil = civil_from_days((secs / 86400) as i64);
    let hour = (secs % 86400) / 3600;
    let min = (secs % 3600) / 60;
    let sec = secs % 60;
    format!(
        "{} {} {:02} {:04} {:02}:{:02}:{:02} UTC",
        WEEKDAYS[civil.weekday],
        MONTHS[civil.month],
        civil.day,
        civil.year,
        hour,
        min,
        sec
    )
}

/// Format a Unix timestamp in milliseconds as a wall clock ("14:03:27").
pub fn format_clock(unix_ms: u64) -> String {
    let secs = unix_ms / MS_PER_SECOND;
    format!(
        "{:02}:{:02}:{:02}",
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Format session uptime (e.g. "42s", "3m 5s", "1h 2m 3s").
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a size in kilobytes for download listings (e.g. "248 KB", "1.8 MB").
pub fn format_size_kb(size_kb: u32) -> String {
    if size_kb >= 1000 {
        format!("{:.1} MB", f64::from(size_kb) / 1000.0)
    } else {
        format!("{} KB", size_kb)
    }
}
