/// Core type definitions for the business-day calculator
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Holidays keyed by calendar date, value is the localized holiday name.
/// Sorted iteration order is what the display filter relies on.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

/// A date range: start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Raw calendar-day difference (may be negative for inverted ranges)
    pub fn elapsed_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Calendar years spanned by the range, ascending.
    /// Empty when the range is inverted across a year boundary.
    pub fn years(&self) -> Vec<i32> {
        (self.start.year()..=self.end.year()).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// The three interaction modes for picking a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// User-chosen start up to the fixed winter-break date
    ToWinterBreak,
    /// Fixed span from term resume to year end
    TermToYearEnd,
    /// User-chosen start and end; end must be strictly after start
    Custom,
}

/// Configuration for the calculator
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // Holiday API
    pub country_code: String,
    pub api_base_url: String,

    // Fixed mode endpoints
    pub winter_break_start: NaiveDate,
    pub term_resume: NaiveDate,
    pub year_end: NaiveDate,

    // Presentation
    pub show_calendar: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            country_code: "AR".to_string(),
            api_base_url: "https://date.nager.at/api/v3/PublicHolidays".to_string(),
            winter_break_start: NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
            term_resume: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            year_end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            show_calendar: true,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_days() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        assert_eq!(range.elapsed_days(), 152);
    }

    #[test]
    fn test_elapsed_days_equal_dates() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let range = DateRange::new(day, day);
        assert_eq!(range.elapsed_days(), 0);
    }

    #[test]
    fn test_years_spanned() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        );
        assert_eq!(range.years(), vec![2024, 2025, 2026]);
    }

    #[test]
    fn test_contains_excludes_end() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        );
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 3, 19).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()));
    }
}
