/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, TimeZone, Utc};

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format a UTC timestamp in the given timezone as DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26Z in UTC+3 -> "15.03.2024 17:02:26"
pub fn format_datetime_in<Tz: TimeZone>(datetime: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime
        .with_timezone(tz)
        .format(DATETIME_FORMAT)
        .to_string()
}

/// Format a UTC timestamp in the browser's local timezone
pub fn format_local_datetime(datetime: &DateTime<Utc>) -> String {
    format_datetime_in(datetime, &Local)
}
