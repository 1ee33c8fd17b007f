/// Monthly calendar grids coloring each in-range day as holiday, weekend,
/// or business day
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::types::{DateRange, HolidayMap};

const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Holiday,
    Weekend,
    Business,
}

/// Classify one day. Holiday wins over weekend, matching the display
/// convention of coloring a Sunday holiday as a holiday.
pub fn classify_day(date: NaiveDate, holidays: &HolidayMap) -> DayKind {
    if holidays.contains_key(&date) {
        return DayKind::Holiday;
    }
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        _ => DayKind::Business,
    }
}

/// Every (year, month) touched by the range, ascending.
/// End is exclusive: a range ending on the 1st does not touch that month.
pub fn months_in_range(range: &DateRange) -> Vec<(i32, u32)> {
    if range.end <= range.start {
        return Vec::new();
    }

    let last = range.end - Duration::days(1);
    let mut months = Vec::new();
    let (mut year, mut month) = (range.start.year(), range.start.month());

    loop {
        months.push((year, month));
        if (year, month) == (last.year(), last.month()) {
            break;
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    months
}

/// One month laid out in Monday-first week rows. Cells are None for days
/// outside the month or outside the range.
#[derive(Debug)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<(u32, DayKind)>; 7]>,
}

impl MonthGrid {
    pub fn build(year: i32, month: u32, range: &DateRange, holidays: &HolidayMap) -> Option<Self> {
        let days_in_month = days_in_month(year, month)?;

        let mut weeks = Vec::new();
        let mut week: [Option<(u32, DayKind)>; 7] = [None; 7];

        for day in 1..=days_in_month {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            let col = date.weekday().num_days_from_monday() as usize;

            if range.contains(date) {
                week[col] = Some((day, classify_day(date, holidays)));
            }

            if col == 6 {
                // Weeks entirely outside the range are not rendered
                if week.iter().any(|c| c.is_some()) {
                    weeks.push(week);
                }
                week = [None; 7];
            }
        }
        if week.iter().any(|c| c.is_some()) {
            weeks.push(week);
        }

        Some(MonthGrid { year, month, weeks })
    }

    /// Check whether any day of this month falls inside the range
    pub fn has_days(&self) -> bool {
        !self.weeks.is_empty()
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Render one month grid with ANSI colors: red holiday, gray weekend,
/// green business day
pub fn render_month(grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {} - {:02}\n", grid.year, grid.month));
    out.push_str("  Mo Tu We Th Fr Sa Su\n");

    for week in &grid.weeks {
        out.push(' ');
        for cell in week {
            match cell {
                Some((day, kind)) => {
                    let color = match kind {
                        DayKind::Holiday => RED,
                        DayKind::Weekend => GRAY,
                        DayKind::Business => GREEN,
                    };
                    out.push_str(&format!(" {}{:2}{}", color, day, RESET));
                }
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }

    out
}
