//! Fare API route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::QuickEstimate;
use super::models::{FareCalculation, RateConfig, ServiceType, CURRENCY};
use super::rates::rates_for;
use super::requests::{CalculateFareRequest, QuickEstimateRequest, RideshareOptionsRequest};
use super::responses::{RateCardResponse, RideshareOptionsResponse};

/// Routes under `/api/fares`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/fares/calculate", post(calculate))
        .route("/api/fares/rideshare-options", post(rideshare_options))
        .route("/api/fares/estimate", post(quick_estimate))
        .route("/api/fares/rates", get(rate_card))
        .route("/api/fares/rates/:service_type/:service_tier", get(tier_rate))
}

/// Full fare with breakdown and revenue split
pub async fn calculate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculateFareRequest>, JsonRejection>,
) -> Result<Json<FareCalculation>> {
    let Json(request) = payload?;
    let service_type: ServiceType = request.service_type.parse()?;

    let fare = state.fares.calculate_fare(
        service_type,
        &request.service_tier,
        request.distance_km,
        request.duration_minutes,
        request.as_of,
    )?;

    Ok(Json(fare))
}

/// Every rideshare tier priced for the same trip
pub async fn rideshare_options(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RideshareOptionsRequest>, JsonRejection>,
) -> Result<Json<RideshareOptionsResponse>> {
    let Json(request) = payload?;
    let options = state
        .fares
        .rideshare_options(request.distance_km, request.duration_minutes, request.as_of)?;

    Ok(Json(RideshareOptionsResponse {
        options,
        currency: CURRENCY,
    }))
}

/// Distance-only estimate
pub async fn quick_estimate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuickEstimateRequest>, JsonRejection>,
) -> Result<Json<QuickEstimate>> {
    let Json(request) = payload?;
    let service_type: ServiceType = request.service_type.parse()?;

    let estimate = state.fares.quick_estimate(
        service_type,
        &request.service_tier,
        request.distance_km,
        request.as_of,
    )?;

    Ok(Json(estimate))
}

/// Every rate configuration
pub async fn rate_card() -> Json<RateCardResponse> {
    Json(RateCardResponse {
        currency: CURRENCY,
        rideshare: rates_for(ServiceType::Rideshare),
        courier: rates_for(ServiceType::Courier),
        delivery: rates_for(ServiceType::Delivery),
    })
}

/// One tier's rate configuration
pub async fn tier_rate(
    State(state): State<AppState>,
    Path((service_type, service_tier)): Path<(String, String)>,
) -> Result<Json<&'static RateConfig>> {
    let service_type: ServiceType = service_type
        .parse()
        .map_err(|e: super::PricingError| AppError::NotFound(e.to_string()))?;

    Ok(Json(state.fares.rate_card(service_type, &service_tier)?))
}
