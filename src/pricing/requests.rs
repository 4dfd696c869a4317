//! Request DTOs for fare API endpoints.
//!
//! Distances and durations accept JSON numbers or decimal strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to calculate a full fare
#[derive(Debug, Deserialize)]
pub struct CalculateFareRequest {
    pub service_type: String,
    #[serde(default)]
    pub service_tier: String,
    pub distance_km: Decimal,
    pub duration_minutes: Decimal,
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

/// Request to compare every rideshare tier
#[derive(Debug, Deserialize)]
pub struct RideshareOptionsRequest {
    pub distance_km: Decimal,
    pub duration_minutes: Decimal,
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

/// Request for a distance-only estimate
#[derive(Debug, Deserialize)]
pub struct QuickEstimateRequest {
    pub service_type: String,
    #[serde(default)]
    pub service_tier: String,
    pub distance_km: Decimal,
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}
