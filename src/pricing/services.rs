//! Fare service.
//!
//! Resolves the moment of calculation (explicit `as_of` or now), converts
//! it to local time and delegates to the pure calculators.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::calculators::{self, FareOption, QuickEstimate};
use super::calendar::{to_local, utc_offset, HolidayCalendar, TRINIDAD_UTC_OFFSET_HOURS};
use super::models::{FareCalculation, RateConfig, ServiceType};
use super::rates;

/// Pricing error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown service type '{0}' (expected rideshare, courier or delivery)")]
    UnknownServiceType(String),

    #[error("Unknown {service_type} tier '{tier}'")]
    UnknownTier {
        service_type: ServiceType,
        tier: String,
    },

    #[error("Amount out of range while computing the {0}")]
    AmountOutOfRange(&'static str),
}

/// Fare calculator bound to a local timezone and holiday calendar
#[derive(Debug, Clone)]
pub struct FareService {
    offset: FixedOffset,
    calendar: HolidayCalendar,
}

impl FareService {
    pub fn new(offset: FixedOffset, calendar: HolidayCalendar) -> Self {
        Self { offset, calendar }
    }

    /// Trinidad time with the fixed holiday list
    pub fn trinidad() -> Self {
        let offset = utc_offset(TRINIDAD_UTC_OFFSET_HOURS).unwrap_or_else(|| Utc.fix());
        Self::new(offset, HolidayCalendar::new())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Local wall-clock time for a pricing request
    pub fn local_time(&self, as_of: Option<DateTime<Utc>>) -> NaiveDateTime {
        to_local(as_of.unwrap_or_else(Utc::now), self.offset)
    }

    /// Calculate a fare.
    ///
    /// # Arguments
    /// * `service_type` - Rideshare, courier or delivery
    /// * `service_tier` - Tier name; unknown names use the default tier
    /// * `distance_km` - Trip distance
    /// * `duration_minutes` - Trip duration
    /// * `as_of` - Point in time for surcharge windows (default: now)
    ///
    /// # Errors
    /// `AmountOutOfRange` if the inputs are too large to price.
    #[instrument(skip(self))]
    pub fn calculate_fare(
        &self,
        service_type: ServiceType,
        service_tier: &str,
        distance_km: Decimal,
        duration_minutes: Decimal,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<FareCalculation, PricingError> {
        let local_time = self.local_time(as_of);
        let fare = calculators::calculate_fare(
            service_type,
            service_tier,
            distance_km,
            duration_minutes,
            local_time,
            &self.calendar,
        )?;

        debug!(
            tier = fare.service_tier,
            surcharge = fare.surcharge_label,
            actual_fare = %fare.actual_fare,
            "Calculated fare at {}",
            local_time
        );

        Ok(fare)
    }

    /// Price every rideshare tier for the same trip
    #[instrument(skip(self))]
    pub fn rideshare_options(
        &self,
        distance_km: Decimal,
        duration_minutes: Decimal,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<FareOption>, PricingError> {
        let local_time = self.local_time(as_of);
        let options = calculators::rideshare_options(distance_km, duration_minutes, local_time, &self.calendar)?;
        debug!("Priced {} rideshare options at {}", options.len(), local_time);
        Ok(options)
    }

    /// Estimate a fare from distance alone
    #[instrument(skip(self))]
    pub fn quick_estimate(
        &self,
        service_type: ServiceType,
        service_tier: &str,
        distance_km: Decimal,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<QuickEstimate, PricingError> {
        let local_time = self.local_time(as_of);
        calculators::quick_estimate(service_type, service_tier, distance_km, local_time, &self.calendar)
    }

    /// Rate card for one tier. Unlike fare calculation, unknown tiers are
    /// an error here.
    pub fn rate_card(&self, service_type: ServiceType, service_tier: &str) -> Result<&'static RateConfig, PricingError> {
        rates::find_rate(service_type, service_tier)
    }
}

impl Default for FareService {
    fn default() -> Self {
        Self::trinidad()
    }
}
