//! Fare engine for rideshare, courier and delivery services.
//!
//! Pure calculators price a trip from static rate tables; the service
//! layer supplies local time and the holiday calendar, and the routes
//! expose it over HTTP/JSON.

pub mod calculators;
pub mod calendar;
pub mod models;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, FareOption, QuickEstimate};
pub use calendar::HolidayCalendar;
pub use models::{FareCalculation, RateConfig, ServiceType, Surcharge, SurchargeKind};
pub use routes::router;
pub use services::{FareService, PricingError};
