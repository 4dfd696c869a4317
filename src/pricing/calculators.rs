//! Core fare calculation functions.
//!
//! Pure functions for fare math. The moment of calculation is passed in as
//! local wall-clock time, so nothing here reads the system clock.

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use serde::Serialize;

use super::calendar::{select_surcharge, HolidayCalendar};
use super::models::{FareCalculation, RateConfig, ServiceType, Surcharge, CURRENCY};
use super::rates::{rates_for, resolve_rate};
use super::services::PricingError;

/// Average pace assumed by quick estimates when no route duration is known
pub const QUICK_ESTIMATE_MINUTES_PER_KM: u32 = 3;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use fare_engine::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

fn checked(amount: Option<Decimal>, what: &'static str) -> Result<Decimal, PricingError> {
    amount.ok_or(PricingError::AmountOutOfRange(what))
}

/// Price a trip against one rate with an already chosen surcharge.
///
/// Distance and time components are rounded to cents, the surcharge amount
/// is rounded to cents and added to the subtotal, and the minimum fare floor
/// is applied last. Commission is rounded to cents and the driver keeps the
/// remainder, so `driver_earnings + commission_amount == actual_fare` exactly.
///
/// Returns `AmountOutOfRange` when an input is too large for any amount to
/// be represented.
pub fn price_trip(
    rate: &RateConfig,
    distance_km: Decimal,
    duration_minutes: Decimal,
    surcharge: Surcharge,
) -> Result<FareCalculation, PricingError> {
    let base_fare = rate.base_fare;
    let distance_fare = round_money(checked(distance_km.checked_mul(rate.per_km), "distance fare")?, 2);
    let time_fare = round_money(checked(duration_minutes.checked_mul(rate.per_min), "time fare")?, 2);
    let subtotal = checked(
        base_fare
            .checked_add(distance_fare)
            .and_then(|sum| sum.checked_add(time_fare)),
        "subtotal",
    )?;

    let surcharge_amount = round_money(
        checked(subtotal.checked_mul(surcharge.multiplier - Decimal::ONE), "surcharge")?,
        2,
    );
    let total_fare = checked(subtotal.checked_add(surcharge_amount), "total fare")?;

    let minimum_fare_applied = total_fare < rate.minimum_fare;
    let actual_fare = total_fare.max(rate.minimum_fare);

    let commission = checked(actual_fare.checked_mul(rate.commission_pct), "commission")?;
    let commission_amount = round_money(commission / Decimal::ONE_HUNDRED, 2);
    let driver_earnings = actual_fare - commission_amount;

    let mut breakdown = Vec::with_capacity(7);
    if let Some(kind) = surcharge.kind {
        breakdown.push(format!(
            "{} ({}x): +TT${:.2}",
            kind.label(),
            surcharge.multiplier.normalize(),
            surcharge_amount
        ));
    }
    breakdown.push(format!("Base Fare: TT${:.2}", base_fare));
    breakdown.push(format!(
        "Distance ({} km × TT${:.2}/km): TT${:.2}",
        distance_km.normalize(),
        rate.per_km,
        distance_fare
    ));
    breakdown.push(format!(
        "Time ({} min × TT${:.2}/min): TT${:.2}",
        duration_minutes.normalize(),
        rate.per_min,
        time_fare
    ));
    if minimum_fare_applied {
        breakdown.push(format!("Minimum Fare Applied: TT${:.2}", rate.minimum_fare));
    }
    breakdown.push(format!(
        "Platform Commission ({}%): -TT${:.2}",
        rate.commission_pct.normalize(),
        commission_amount
    ));
    breakdown.push(format!("Driver Earnings: TT${:.2}", driver_earnings));

    Ok(FareCalculation {
        service_type: rate.service_type,
        service_tier: rate.tier,
        distance_km,
        duration_minutes,
        base_fare,
        distance_fare,
        time_fare,
        subtotal,
        surcharge_type: surcharge.kind,
        surcharge_label: surcharge.label(),
        surcharge_multiplier: surcharge.multiplier,
        surcharge_amount,
        total_fare,
        minimum_fare: rate.minimum_fare,
        minimum_fare_applied,
        actual_fare,
        commission_pct: rate.commission_pct,
        commission_amount,
        driver_earnings,
        currency: CURRENCY,
        breakdown,
    })
}

/// Calculate a fare at the given local time.
///
/// Unknown tiers fall back to the service type's default tier.
pub fn calculate_fare(
    service_type: ServiceType,
    service_tier: &str,
    distance_km: Decimal,
    duration_minutes: Decimal,
    local_time: NaiveDateTime,
    calendar: &HolidayCalendar,
) -> Result<FareCalculation, PricingError> {
    let rate = resolve_rate(service_type, service_tier);
    let surcharge = select_surcharge(rate, local_time, calendar);
    price_trip(rate, distance_km, duration_minutes, surcharge)
}

/// One priced rideshare tier, for side-by-side comparison
#[derive(Debug, Clone, Serialize)]
pub struct FareOption {
    pub tier: &'static str,
    pub rate: &'static RateConfig,
    pub fare: FareCalculation,
}

/// Price every rideshare tier for the same trip
pub fn rideshare_options(
    distance_km: Decimal,
    duration_minutes: Decimal,
    local_time: NaiveDateTime,
    calendar: &HolidayCalendar,
) -> Result<Vec<FareOption>, PricingError> {
    rates_for(ServiceType::Rideshare)
        .iter()
        .map(|rate| {
            let surcharge = select_surcharge(rate, local_time, calendar);
            Ok(FareOption {
                tier: rate.tier,
                rate,
                fare: price_trip(rate, distance_km, duration_minutes, surcharge)?,
            })
        })
        .collect()
}

/// Distance-only fare estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickEstimate {
    pub service_type: ServiceType,
    /// Tier actually priced, after any fallback to the default tier
    pub service_tier: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub estimated_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub assumed_duration_minutes: Decimal,
    pub currency: &'static str,
}

/// Estimate a fare before a route duration is known.
///
/// Duration is approximated at three minutes per kilometre. The estimate
/// goes through the full calculation, so it carries the same surcharge and
/// minimum fare as a real quote made at the same moment.
pub fn quick_estimate(
    service_type: ServiceType,
    service_tier: &str,
    distance_km: Decimal,
    local_time: NaiveDateTime,
    calendar: &HolidayCalendar,
) -> Result<QuickEstimate, PricingError> {
    let duration_minutes = checked(
        distance_km.checked_mul(Decimal::from(QUICK_ESTIMATE_MINUTES_PER_KM)),
        "assumed duration",
    )?;
    let fare = calculate_fare(
        service_type,
        service_tier,
        distance_km,
        duration_minutes,
        local_time,
        calendar,
    )?;

    Ok(QuickEstimate {
        service_type: fare.service_type,
        service_tier: fare.service_tier,
        estimated_fare: fare.actual_fare,
        assumed_duration_minutes: duration_minutes,
        currency: CURRENCY,
    })
}
