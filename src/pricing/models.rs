//! Pricing domain models.
//!
//! Rate configurations are static and shared; fare calculations are
//! transient values produced per request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::services::PricingError;

/// Currency every fare is quoted in.
pub const CURRENCY: &str = "TTD";

/// Service category a fare is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Rideshare,
    Courier,
    Delivery,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Rideshare,
        ServiceType::Courier,
        ServiceType::Delivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Rideshare => "rideshare",
            ServiceType::Courier => "courier",
            ServiceType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rideshare" => Ok(ServiceType::Rideshare),
            "courier" => Ok(ServiceType::Courier),
            "delivery" => Ok(ServiceType::Delivery),
            _ => Err(PricingError::UnknownServiceType(s.to_string())),
        }
    }
}

/// Rate configuration for one (service type, tier) pair.
///
/// All amounts are in TTD. A `None` multiplier means the tier never
/// applies that surcharge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateConfig {
    pub service_type: ServiceType,
    pub tier: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u8>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_km: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_min: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_pct: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub night_multiplier: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub peak_multiplier: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub holiday_multiplier: Option<Decimal>,
}

impl RateConfig {
    /// Multiplier configured for the given surcharge window, if any
    pub fn multiplier_for(&self, kind: SurchargeKind) -> Option<Decimal> {
        match kind {
            SurchargeKind::Holiday => self.holiday_multiplier,
            SurchargeKind::Night => self.night_multiplier,
            SurchargeKind::Peak => self.peak_multiplier,
        }
    }
}

/// Demand window that can raise a fare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurchargeKind {
    Holiday,
    Night,
    Peak,
}

impl SurchargeKind {
    /// Evaluation order. The first window that matches and has a
    /// multiplier wins.
    pub const PRECEDENCE: [SurchargeKind; 3] = [
        SurchargeKind::Holiday,
        SurchargeKind::Night,
        SurchargeKind::Peak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SurchargeKind::Holiday => "Holiday Surcharge",
            SurchargeKind::Night => "Night Surcharge",
            SurchargeKind::Peak => "Peak Hour Surcharge",
        }
    }
}

/// Surcharge chosen for a calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surcharge {
    pub kind: Option<SurchargeKind>,
    pub multiplier: Decimal,
}

impl Surcharge {
    pub const STANDARD_LABEL: &'static str = "Standard Rate";

    /// No surcharge (multiplier 1.0)
    pub fn standard() -> Self {
        Self {
            kind: None,
            multiplier: Decimal::ONE,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.map_or(Self::STANDARD_LABEL, |k| k.label())
    }
}

/// Priced result of a single trip, delivery or courier request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareCalculation {
    pub service_type: ServiceType,
    pub service_tier: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub duration_minutes: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub surcharge_type: Option<SurchargeKind>,
    pub surcharge_label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_fare: Decimal,
    pub minimum_fare_applied: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub actual_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_pct: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub driver_earnings: Decimal,
    pub currency: &'static str,
    pub breakdown: Vec<String>,
}

impl FareCalculation {
    pub fn has_surcharge(&self) -> bool {
        self.surcharge_type.is_some()
    }
}
