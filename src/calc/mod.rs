/// Business-day counting over a holiday calendar
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::types::{DateRange, HolidayMap};

/// Check if a date is a business day (not weekend, not holiday)
pub fn is_business_day(date: NaiveDate, holidays: &HolidayMap) -> bool {
    // Check weekend
    let weekday = date.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return false;
    }

    // Check holiday
    !holidays.contains_key(&date)
}

/// Count business days in [start, end): weekdays that are not holidays.
/// An empty or inverted range counts zero.
pub fn count_business_days(start: NaiveDate, end: NaiveDate, holidays: &HolidayMap) -> i64 {
    if end <= start {
        return 0;
    }

    let mut count = 0;
    let mut date = start;
    while date < end {
        if is_business_day(date, holidays) {
            count += 1;
        }
        date += Duration::days(1);
    }

    count
}

/// Holidays falling inside [start, end), ascending by date.
/// Display enumeration only; counting never goes through here.
/// An empty or inverted range (fixed modes permit those) yields nothing.
pub fn holidays_in_range(holidays: &HolidayMap, range: &DateRange) -> Vec<(NaiveDate, String)> {
    // BTreeMap::range panics on an inverted bound
    if range.end <= range.start {
        return Vec::new();
    }

    holidays
        .range(range.start..range.end)
        .map(|(date, name)| (*date, name.clone()))
        .collect()
}
