use chrono::{DateTime, Local, TimeZone};

use super::constants::REPORT_TIMESTAMP_FORMAT;

/// Format a moment as the `YYYY-MM-DD-HH-MM-SS` stamp used in report names
pub fn report_timestamp<Tz: TimeZone>(moment: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    moment.format(REPORT_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a report stamp
pub fn current_report_timestamp() -> String {
    report_timestamp(&Local::now())
}
