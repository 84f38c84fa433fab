//! Date and time encoding for switching tables.

use chrono::{Duration, NaiveTime};

use super::body::{DateSpec, DayOfMonthSpec, DayOfWeekSpec, Marker, MonthSpec, YearSpec};
use crate::domain::tariff::model::{
    CalendarDate, LAST_DAY_OF_MONTH, SECOND_LAST_DAY_OF_MONTH,
};

/// Encodes each calendar axis as specified or wildcard. The month sentinels
/// map to their dedicated elements.
pub fn build_date(date: &CalendarDate) -> DateSpec {
    DateSpec {
        year: match date.year {
            None => YearSpec::NonSpecifiedYear(Marker),
            Some(year) => YearSpec::SpecifiedYear(year.to_string()),
        },
        month: match date.month {
            None => MonthSpec::NonSpecifiedMonth(Marker),
            Some(SECOND_LAST_DAY_OF_MONTH) => MonthSpec::SecondLastDayOfMonth(Marker),
            Some(LAST_DAY_OF_MONTH) => MonthSpec::LastDayOfMonth(Marker),
            Some(month) => MonthSpec::SpecifiedMonth(month.to_string()),
        },
        day_of_month: match date.day_of_month {
            None => DayOfMonthSpec::NonSpecifiedDayOfMonth(Marker),
            Some(day) => DayOfMonthSpec::SpecifiedDayOfMonth(day.to_string()),
        },
        day_of_week: match date.day_of_week {
            None => DayOfWeekSpec::NonSpecifiedDayOfWeek(Marker),
            Some(day) => DayOfWeekSpec::SpecifiedDayOfWeek(day.to_string()),
        },
    }
}

/// Seconds since midnight as `HH:MM:SS.00Z`, wrapping at 24h.
pub fn start_time(seconds: u32) -> String {
    let (time, _wrapped) =
        NaiveTime::default().overflowing_add_signed(Duration::seconds(i64::from(seconds)));
    time.format("%H:%M:%S.00Z").to_string()
}
