pub mod client;
pub mod provider;

pub use client::{FetchHolidays, HolidayRecord, NagerClient};
pub use provider::{HolidayProvider, HolidayReport};
