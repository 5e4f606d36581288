//! Wall-clock helpers shared by the status bar clock and the terminal `date` command.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

const WEEKDAYS_ES: [&str; 7] = ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Layout of the terminal `date` line, e.g. `Fri Mar 24 2023 14:05:09 GMT+0100`.
const DATE_LINE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Local calendar time broken into display fields.
///
/// `weekday` is `0` for Sunday; `month` is `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalClockSnapshot {
    /// Calendar year.
    pub year: i32,
    /// Month of the year.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Day of the week.
    pub weekday: u32,
    /// Hour, 24-hour clock.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
    /// Second.
    pub second: u32,
}

impl LocalClockSnapshot {
    /// Reads the host clock in the host's time zone.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Breaks `moment` into fields in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self {
            year: moment.year(),
            month: moment.month(),
            day: moment.day(),
            weekday: moment.weekday().num_days_from_sunday(),
            hour: moment.hour(),
            minute: moment.minute(),
            second: moment.second(),
        }
    }

    /// Short Spanish date such as `vie, 24 mar`.
    pub fn short_date_es(&self) -> String {
        format!(
            "{}, {} {}",
            WEEKDAYS_ES[self.weekday as usize % 7],
            self.day,
            MONTHS_ES[(self.month as usize).saturating_sub(1) % 12]
        )
    }

    /// 24-hour `HH:MM` time.
    pub fn time_24h(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Formats `moment` the way the terminal `date` command prints it.
pub fn datetime_line<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    moment.format(DATE_LINE_FORMAT).to_string()
}

/// Returns the host's full local date/time string.
pub fn local_datetime_string() -> String {
    datetime_line(&Local::now())
}
