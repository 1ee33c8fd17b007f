/// Holiday provider with a per-year memoized cache
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{CalcError, Result};
use crate::holidays::client::FetchHolidays;
use crate::types::HolidayMap;

/// Aggregated holidays for a set of years, plus the years whose fetch
/// failed. Failures are non-fatal: a failed year simply contributes no
/// holidays, and the caller shows the warning.
#[derive(Debug, Clone)]
pub struct HolidayReport {
    pub holidays: HolidayMap,
    pub failed_years: Vec<(i32, String)>,
}

/// Fetches and caches public holidays per year.
///
/// Successfully fetched years are kept for the process lifetime; repeated
/// requests for the same years never re-fetch. Failed years are not cached,
/// so a later call can retry them.
pub struct HolidayProvider<F: FetchHolidays> {
    fetcher: F,
    cache: RwLock<HashMap<i32, HolidayMap>>,
}

impl<F: FetchHolidays> HolidayProvider<F> {
    pub fn new(fetcher: F) -> Self {
        HolidayProvider {
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Aggregate holidays across the given years, fetching uncached ones
    pub async fn holidays_for_years(&self, years: &[i32]) -> HolidayReport {
        let mut report = HolidayReport {
            holidays: HolidayMap::new(),
            failed_years: Vec::new(),
        };

        for &year in years {
            // Cache hit
            {
                let cache = self.cache.read().await;
                if let Some(cached) = cache.get(&year) {
                    report
                        .holidays
                        .extend(cached.iter().map(|(d, n)| (*d, n.clone())));
                    continue;
                }
            }

            match self.fetch_and_parse(year).await {
                Ok(map) => {
                    info!("✅ Cached {} holidays for {}", map.len(), year);
                    report
                        .holidays
                        .extend(map.iter().map(|(d, n)| (*d, n.clone())));

                    // Idempotent upsert: a concurrent fetch of the same year
                    // would overwrite with equivalent data
                    let mut cache = self.cache.write().await;
                    cache.insert(year, map);
                }
                Err(e) => {
                    warn!("⚠️  Failed to fetch holidays for {}: {}", year, e);
                    report.failed_years.push((year, e.to_string()));
                }
            }
        }

        report
    }

    /// Fetch one year and parse its records into a date-keyed map.
    /// A single unparsable record fails the whole year.
    async fn fetch_and_parse(&self, year: i32) -> Result<HolidayMap> {
        let records = self.fetcher.fetch_year(year).await?;

        let mut map = HolidayMap::new();
        for record in records {
            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| {
                CalcError::InvalidHolidayRecord {
                    year,
                    reason: format!("bad date {:?}: {}", record.date, e),
                }
            })?;
            map.insert(date, record.local_name);
        }

        Ok(map)
    }

    /// Check whether a year is already cached
    pub async fn is_cached(&self, year: i32) -> bool {
        let cache = self.cache.read().await;
        cache.contains_key(&year)
    }
}
