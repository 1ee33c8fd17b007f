pub mod types;
pub mod error;
pub mod config;
pub mod holidays;
pub mod calc;
pub mod calendar;
pub mod ui;

pub use types::*;
pub use error::{CalcError, Result};
