//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Pricing(PricingError::UnknownServiceType(_)) => {
                (StatusCode::BAD_REQUEST, "unknown_service_type")
            }
            AppError::Pricing(PricingError::UnknownTier { .. }) => {
                (StatusCode::NOT_FOUND, "unknown_tier")
            }
            AppError::Pricing(PricingError::AmountOutOfRange(_)) => {
                (StatusCode::BAD_REQUEST, "amount_out_of_range")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        // Internal details stay in the log
        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Internal error".to_string()
            }
            _ => {
                tracing::debug!("Request failed with {}: {}", status, self);
                self.to_string()
            }
        };

        let details = match &self {
            AppError::Pricing(PricingError::UnknownTier { service_type, .. }) => Some(serde_json::json!({
                "service_type": service_type,
                "tiers": crate::pricing::rates::rates_for(*service_type)
                    .iter()
                    .map(|rate| rate.tier)
                    .collect::<Vec<_>>(),
            })),
            _ => None,
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::ServiceType;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let err = AppError::from(PricingError::UnknownServiceType("boat".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::from(PricingError::UnknownTier {
            service_type: ServiceType::Courier,
            tier: "drone".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = AppError::from(PricingError::AmountOutOfRange("subtotal"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::NotFound("nothing here".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = AppError::BadRequest("missing field".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let body = body_json(AppError::Internal("handler panicked: boom".to_string()).into_response()).await;
        assert_eq!(body["error_type"], "internal_error");
        assert_eq!(body["message"], "Internal error");
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let body = body_json(AppError::BadRequest("missing field `distance_km`".to_string()).into_response()).await;
        assert_eq!(body["error_type"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("distance_km"));
        assert!(body.get("details").is_none());
    }
}
