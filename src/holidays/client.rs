/// Nager.Date public-holiday API client
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CalcError, Result};

/// One holiday record as returned by the API.
/// Only the date and localized name matter; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayRecord {
    pub date: String,
    #[serde(rename = "localName")]
    pub local_name: String,
}

/// Source of per-year holiday records. The production implementation hits
/// the network; tests substitute a canned fetcher.
#[allow(async_fn_in_trait)]
pub trait FetchHolidays {
    async fn fetch_year(&self, year: i32) -> Result<Vec<HolidayRecord>>;
}

/// REST client for the Nager.Date v3 PublicHolidays endpoint
pub struct NagerClient {
    client: Client,
    base_url: String,
    country_code: String,
}

impl NagerClient {
    pub fn new(base_url: String, country_code: String) -> Self {
        NagerClient {
            client: Client::new(),
            base_url,
            country_code,
        }
    }
}

impl FetchHolidays for NagerClient {
    async fn fetch_year(&self, year: i32) -> Result<Vec<HolidayRecord>> {
        let url = format!("{}/{}/{}", self.base_url, year, self.country_code);
        debug!("Fetching holidays: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalcError::ApiError {
                year,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Holiday response for {}: status {}, {} bytes", year, status, body.len());

        let records: Vec<HolidayRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }
}
