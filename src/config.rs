//! Application configuration loaded from environment variables.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::env;

use crate::pricing::calendar::{utc_offset, TRINIDAD_UTC_OFFSET_HOURS};
use crate::pricing::{FareService, HolidayCalendar};

/// Service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Whole hours east of UTC used for surcharge windows
    pub utc_offset_hours: i32,
    /// Moveable holidays on top of the fixed yearly list
    pub extra_holidays: Vec<NaiveDate>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {value}"))?,
            None => 8080,
        };

        let utc_offset_hours = match lookup("FARE_UTC_OFFSET_HOURS") {
            Some(value) => value
                .trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid FARE_UTC_OFFSET_HOURS: {value}"))?,
            None => TRINIDAD_UTC_OFFSET_HOURS,
        };
        if utc_offset(utc_offset_hours).is_none() {
            bail!("FARE_UTC_OFFSET_HOURS out of range: {utc_offset_hours}");
        }

        let extra_holidays = match lookup("FARE_EXTRA_HOLIDAYS") {
            Some(value) => parse_dates(&value)?,
            None => Vec::new(),
        };

        Ok(Self {
            host,
            port,
            utc_offset_hours,
            extra_holidays,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fare service for the configured timezone and holidays
    pub fn fare_service(&self) -> Result<FareService> {
        let offset = utc_offset(self.utc_offset_hours)
            .with_context(|| format!("Invalid UTC offset: {}", self.utc_offset_hours))?;
        let calendar = HolidayCalendar::new().with_dates(self.extra_holidays.iter().copied());
        Ok(FareService::new(offset, calendar))
    }
}

/// Comma-separated YYYY-MM-DD list
fn parse_dates(value: &str) -> Result<Vec<NaiveDate>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date in FARE_EXTRA_HOLIDAYS: {s}"))
        })
        .collect()
}
