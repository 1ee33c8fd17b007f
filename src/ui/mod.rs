/// Interactive terminal frontend: mode selection, date entry, result display
use chrono::{Duration, Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::calc::{count_business_days, holidays_in_range};
use crate::calendar::{months_in_range, render_month, MonthGrid};
use crate::error::{CalcError, Result};
use crate::holidays::{FetchHolidays, HolidayProvider};
use crate::types::{Config, DateRange, RangeMode};

/// Menu selection: a range mode or quit
pub fn parse_mode(input: &str) -> Option<RangeMode> {
    match input.trim() {
        "1" => Some(RangeMode::ToWinterBreak),
        "2" => Some(RangeMode::TermToYearEnd),
        "3" => Some(RangeMode::Custom),
        _ => None,
    }
}

/// Parse a typed date, empty input meaning the shown default
pub fn parse_date_input(input: &str, default: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| CalcError::InvalidInput(format!("Unrecognized date {:?}: {}", trimmed, e)))
}

/// Resolve the effective range for a mode. Fixed endpoints come from config;
/// only the custom mode validates that end is strictly after start.
pub fn resolve_range(
    mode: RangeMode,
    config: &Config,
    user_start: Option<NaiveDate>,
    user_end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateRange> {
    match mode {
        RangeMode::ToWinterBreak => Ok(DateRange::new(
            user_start.unwrap_or(today),
            config.winter_break_start,
        )),
        RangeMode::TermToYearEnd => Ok(DateRange::new(config.term_resume, config.year_end)),
        RangeMode::Custom => {
            let start = user_start.unwrap_or(today);
            let end = user_end.unwrap_or(today + Duration::days(30));
            if end <= start {
                return Err(CalcError::InvalidRange(
                    "end date must be after the start date".to_string(),
                ));
            }
            Ok(DateRange::new(start, end))
        }
    }
}

/// The interactive calculator loop
pub struct App<F: FetchHolidays> {
    config: Config,
    provider: HolidayProvider<F>,
}

impl<F: FetchHolidays> App<F> {
    pub fn new(config: Config, provider: HolidayProvider<F>) -> Self {
        App { config, provider }
    }

    /// Run the interaction loop until the user quits.
    /// No failure exits the loop; errors print a warning and re-prompt.
    pub async fn run(&self) -> Result<()> {
        println!("📅 Business-Day Calculator ({})", self.config.country_code);

        loop {
            println!();
            println!("What do you want to calculate?");
            println!(
                "  1) Until winter break ({})",
                self.config.winter_break_start.format("%d/%m/%Y")
            );
            println!(
                "  2) From term resume ({}) to year end ({})",
                self.config.term_resume.format("%d/%m/%Y"),
                self.config.year_end.format("%d/%m/%Y")
            );
            println!("  3) Between two custom dates");
            println!("  q) Quit");

            let choice = prompt("> ")?;
            if matches!(choice.trim(), "q" | "quit" | "exit") {
                info!("Exiting");
                break;
            }

            let Some(mode) = parse_mode(&choice) else {
                println!("⚠️  Please choose 1, 2, 3 or q.");
                continue;
            };

            let range = match self.collect_range(mode) {
                Ok(range) => range,
                Err(e) => {
                    warn!("Rejected range input: {}", e);
                    println!("⚠️  {}", e);
                    continue;
                }
            };

            self.compute_and_show(&range).await;
        }

        Ok(())
    }

    /// Prompt for the dates the chosen mode needs and resolve the range
    fn collect_range(&self, mode: RangeMode) -> Result<DateRange> {
        let today = Local::now().date_naive();

        let (user_start, user_end) = match mode {
            RangeMode::ToWinterBreak => {
                let input = prompt(&format!("Start date [YYYY-MM-DD, default {}]: ", today))?;
                (Some(parse_date_input(&input, today)?), None)
            }
            RangeMode::TermToYearEnd => {
                println!(
                    "ℹ️  Calculating from {} to {}.",
                    self.config.term_resume.format("%d/%m/%Y"),
                    self.config.year_end.format("%d/%m/%Y")
                );
                (None, None)
            }
            RangeMode::Custom => {
                let start_input =
                    prompt(&format!("Start date [YYYY-MM-DD, default {}]: ", today))?;
                let start = parse_date_input(&start_input, today)?;

                let default_end = today + Duration::days(30);
                let end_input =
                    prompt(&format!("End date [YYYY-MM-DD, default {}]: ", default_end))?;
                let end = parse_date_input(&end_input, default_end)?;

                (Some(start), Some(end))
            }
        };

        resolve_range(mode, &self.config, user_start, user_end, today)
    }

    /// Fetch holidays for the spanned years, count, and print the results
    async fn compute_and_show(&self, range: &DateRange) {
        let years = range.years();
        let report = self.provider.holidays_for_years(&years).await;

        for (year, reason) in &report.failed_years {
            println!("⚠️  Could not fetch holidays for {}: {}", year, reason);
        }

        let elapsed = range.elapsed_days().max(0);
        let business = count_business_days(range.start, range.end, &report.holidays);

        println!();
        println!("📆 Elapsed days: {}", elapsed);
        println!("💼 Business days: {}", business);

        let in_range = holidays_in_range(&report.holidays, range);
        if in_range.is_empty() {
            println!("No holidays within the range.");
        } else {
            println!();
            println!("📌 Holidays within the range:");
            for (date, name) in &in_range {
                println!("  - {}: {}", date.format("%d/%m/%Y"), name);
            }
        }

        if self.config.show_calendar {
            println!();
            for (year, month) in months_in_range(range) {
                if let Some(grid) = MonthGrid::build(year, month, range, &report.holidays) {
                    if grid.has_days() {
                        println!("{}", render_month(&grid));
                    }
                }
            }
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("1"), Some(RangeMode::ToWinterBreak));
        assert_eq!(parse_mode(" 2 "), Some(RangeMode::TermToYearEnd));
        assert_eq!(parse_mode("3"), Some(RangeMode::Custom));
        assert_eq!(parse_mode("4"), None);
        assert_eq!(parse_mode("q"), None);
    }

    #[test]
    fn test_parse_date_input() {
        let default = ymd(2025, 6, 1);
        assert_eq!(parse_date_input("2025-08-15", default).unwrap(), ymd(2025, 8, 15));
        assert_eq!(parse_date_input("  \n", default).unwrap(), default);
        assert!(parse_date_input("15/08/2025", default).is_err());
    }

    #[test]
    fn test_resolve_range_winter_break_mode() {
        let config = Config::default();
        let today = ymd(2025, 6, 1);

        // User-chosen start, fixed end
        let range = resolve_range(
            RangeMode::ToWinterBreak,
            &config,
            Some(ymd(2025, 5, 1)),
            None,
            today,
        )
        .unwrap();
        assert_eq!(range.start, ymd(2025, 5, 1));
        assert_eq!(range.end, config.winter_break_start);

        // Default start is today
        let range = resolve_range(RangeMode::ToWinterBreak, &config, None, None, today).unwrap();
        assert_eq!(range.start, today);
    }

    #[test]
    fn test_resolve_range_term_mode_ignores_user_dates() {
        let config = Config::default();
        let range = resolve_range(
            RangeMode::TermToYearEnd,
            &config,
            Some(ymd(2030, 1, 1)),
            Some(ymd(2030, 2, 1)),
            ymd(2025, 6, 1),
        )
        .unwrap();
        assert_eq!(range.start, config.term_resume);
        assert_eq!(range.end, config.year_end);
    }

    #[test]
    fn test_resolve_range_custom_validates_order() {
        let config = Config::default();
        let today = ymd(2025, 6, 1);

        let err = resolve_range(
            RangeMode::Custom,
            &config,
            Some(ymd(2025, 6, 10)),
            Some(ymd(2025, 6, 10)),
            today,
        );
        assert!(matches!(err, Err(CalcError::InvalidRange(_))));

        let err = resolve_range(
            RangeMode::Custom,
            &config,
            Some(ymd(2025, 6, 10)),
            Some(ymd(2025, 6, 1)),
            today,
        );
        assert!(matches!(err, Err(CalcError::InvalidRange(_))));

        let ok = resolve_range(
            RangeMode::Custom,
            &config,
            Some(ymd(2025, 6, 10)),
            Some(ymd(2025, 6, 11)),
            today,
        )
        .unwrap();
        assert_eq!(ok.elapsed_days(), 1);
    }

    #[test]
    fn test_resolve_range_custom_defaults() {
        let config = Config::default();
        let today = ymd(2025, 6, 1);
        let range = resolve_range(RangeMode::Custom, &config, None, None, today).unwrap();
        assert_eq!(range.start, today);
        assert_eq!(range.end, today + Duration::days(30));
    }

    // Fixed modes are exempt from the end-after-start check: a start typed
    // after the winter break just counts zero
    #[test]
    fn test_winter_break_mode_allows_inverted_range() {
        let config = Config::default();
        let range = resolve_range(
            RangeMode::ToWinterBreak,
            &config,
            Some(ymd(2025, 9, 1)),
            None,
            ymd(2025, 9, 1),
        )
        .unwrap();
        assert!(range.end <= range.start);
        assert_eq!(
            crate::calc::count_business_days(range.start, range.end, &Default::default()),
            0
        );
    }
}
