//! Static rate tables for every service type.
//!
//! Rates are compiled in and only change with a deployment.

use rust_decimal_macros::dec;
use std::sync::LazyLock;

use super::models::{RateConfig, ServiceType};
use super::services::PricingError;

static RIDESHARE_RATES: LazyLock<Vec<RateConfig>> = LazyLock::new(|| {
    vec![
        RateConfig {
            service_type: ServiceType::Rideshare,
            tier: "economy",
            display_name: "Economy",
            description: "Affordable everyday rides",
            capacity: Some(4),
            base_fare: dec!(15),
            minimum_fare: dec!(25),
            per_km: dec!(4.5),
            per_min: dec!(1.0),
            commission_pct: dec!(20),
            night_multiplier: Some(dec!(1.25)),
            peak_multiplier: Some(dec!(1.3)),
            holiday_multiplier: Some(dec!(1.5)),
        },
        RateConfig {
            service_type: ServiceType::Rideshare,
            tier: "standard",
            display_name: "Standard",
            description: "Newer cars with extra legroom",
            capacity: Some(4),
            base_fare: dec!(20),
            minimum_fare: dec!(30),
            per_km: dec!(5.5),
            per_min: dec!(1.25),
            commission_pct: dec!(20),
            night_multiplier: Some(dec!(1.25)),
            peak_multiplier: Some(dec!(1.3)),
            holiday_multiplier: Some(dec!(1.5)),
        },
        RateConfig {
            service_type: ServiceType::Rideshare,
            tier: "premium",
            display_name: "Premium",
            description: "Luxury vehicles with top-rated drivers",
            capacity: Some(4),
            base_fare: dec!(35),
            minimum_fare: dec!(50),
            per_km: dec!(8.0),
            per_min: dec!(2.0),
            commission_pct: dec!(25),
            night_multiplier: Some(dec!(1.3)),
            peak_multiplier: Some(dec!(1.4)),
            holiday_multiplier: Some(dec!(1.75)),
        },
        RateConfig {
            service_type: ServiceType::Rideshare,
            tier: "xl",
            display_name: "XL",
            description: "SUVs and minivans for groups",
            capacity: Some(6),
            base_fare: dec!(30),
            minimum_fare: dec!(45),
            per_km: dec!(7.0),
            per_min: dec!(1.5),
            commission_pct: dec!(22),
            night_multiplier: Some(dec!(1.25)),
            peak_multiplier: Some(dec!(1.35)),
            holiday_multiplier: Some(dec!(1.6)),
        },
    ]
});

static COURIER_RATES: LazyLock<Vec<RateConfig>> = LazyLock::new(|| {
    vec![
        RateConfig {
            service_type: ServiceType::Courier,
            tier: "bike",
            display_name: "Bike Courier",
            description: "Documents and small parcels",
            capacity: None,
            base_fare: dec!(10),
            minimum_fare: dec!(15),
            per_km: dec!(3.0),
            per_min: dec!(0.5),
            commission_pct: dec!(15),
            night_multiplier: None,
            peak_multiplier: Some(dec!(1.2)),
            holiday_multiplier: None,
        },
        RateConfig {
            service_type: ServiceType::Courier,
            tier: "car",
            display_name: "Car Courier",
            description: "Medium parcels and multiple packages",
            capacity: None,
            base_fare: dec!(18),
            minimum_fare: dec!(25),
            per_km: dec!(4.0),
            per_min: dec!(0.8),
            commission_pct: dec!(18),
            night_multiplier: Some(dec!(1.2)),
            peak_multiplier: Some(dec!(1.25)),
            holiday_multiplier: Some(dec!(1.4)),
        },
        RateConfig {
            service_type: ServiceType::Courier,
            tier: "van",
            display_name: "Van Courier",
            description: "Bulky items and small moves",
            capacity: None,
            base_fare: dec!(35),
            minimum_fare: dec!(50),
            per_km: dec!(6.5),
            per_min: dec!(1.2),
            commission_pct: dec!(18),
            night_multiplier: Some(dec!(1.2)),
            peak_multiplier: Some(dec!(1.25)),
            holiday_multiplier: Some(dec!(1.4)),
        },
    ]
});

static DELIVERY_RATES: LazyLock<Vec<RateConfig>> = LazyLock::new(|| {
    vec![
        RateConfig {
            service_type: ServiceType::Delivery,
            tier: "food",
            display_name: "Food Delivery",
            description: "Restaurant orders delivered hot",
            capacity: None,
            base_fare: dec!(12),
            minimum_fare: dec!(18),
            per_km: dec!(3.5),
            per_min: dec!(0.7),
            commission_pct: dec!(18),
            night_multiplier: Some(dec!(1.2)),
            peak_multiplier: Some(dec!(1.15)),
            holiday_multiplier: None,
        },
        RateConfig {
            service_type: ServiceType::Delivery,
            tier: "grocery",
            display_name: "Grocery Delivery",
            description: "Supermarket and market runs",
            capacity: None,
            base_fare: dec!(15),
            minimum_fare: dec!(22),
            per_km: dec!(3.5),
            per_min: dec!(0.6),
            commission_pct: dec!(15),
            night_multiplier: None,
            peak_multiplier: Some(dec!(1.1)),
            holiday_multiplier: Some(dec!(1.25)),
        },
        RateConfig {
            service_type: ServiceType::Delivery,
            tier: "pharmacy",
            display_name: "Pharmacy Delivery",
            description: "Prescriptions and health essentials",
            capacity: None,
            base_fare: dec!(14),
            minimum_fare: dec!(20),
            per_km: dec!(3.0),
            per_min: dec!(0.6),
            commission_pct: dec!(12),
            night_multiplier: Some(dec!(1.25)),
            peak_multiplier: None,
            holiday_multiplier: None,
        },
    ]
});

/// All tiers for a service type, in display order
pub fn rates_for(service_type: ServiceType) -> &'static [RateConfig] {
    match service_type {
        ServiceType::Rideshare => &RIDESHARE_RATES,
        ServiceType::Courier => &COURIER_RATES,
        ServiceType::Delivery => &DELIVERY_RATES,
    }
}

/// Tier used when a request names one that doesn't exist
pub fn default_tier(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Rideshare => "economy",
        ServiceType::Courier => "car",
        ServiceType::Delivery => "food",
    }
}

/// Strict lookup. Tier names are matched case-insensitively.
pub fn find_rate(service_type: ServiceType, tier: &str) -> Result<&'static RateConfig, PricingError> {
    let wanted = tier.trim();
    rates_for(service_type)
        .iter()
        .find(|rate| rate.tier.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| PricingError::UnknownTier {
            service_type,
            tier: tier.to_string(),
        })
}

/// Lookup that falls back to the service type's default tier.
pub fn resolve_rate(service_type: ServiceType, tier: &str) -> &'static RateConfig {
    find_rate(service_type, tier).unwrap_or_else(|_| {
        tracing::debug!(
            "Unknown {} tier '{}', falling back to '{}'",
            service_type,
            tier,
            default_tier(service_type)
        );
        default_rate(service_type)
    })
}

fn default_rate(service_type: ServiceType) -> &'static RateConfig {
    let default = default_tier(service_type);
    let rates = rates_for(service_type);
    // Every table lists its default tier
    rates
        .iter()
        .find(|rate| rate.tier == default)
        .unwrap_or(&rates[0])
}
