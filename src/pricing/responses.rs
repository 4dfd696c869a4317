//! Response DTOs for fare API endpoints.

use serde::Serialize;

use super::calculators::FareOption;
use super::models::RateConfig;

/// Response for the rideshare comparison
#[derive(Debug, Serialize)]
pub struct RideshareOptionsResponse {
    pub options: Vec<FareOption>,
    pub currency: &'static str,
}

/// Full rate card, grouped by service type
#[derive(Debug, Serialize)]
pub struct RateCardResponse {
    pub currency: &'static str,
    pub rideshare: &'static [RateConfig],
    pub courier: &'static [RateConfig],
    pub delivery: &'static [RateConfig],
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
