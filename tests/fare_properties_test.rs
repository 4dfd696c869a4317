// Property-based tests for fare calculation
//
// Revenue split, minimum fare floor, monotonicity in distance,
// default-tier fallback, surcharge precedence and out-of-range inputs.

use chrono::{NaiveDate, NaiveDateTime};
use fare_engine::pricing::calculators::{calculate_fare, price_trip, rideshare_options};
use fare_engine::pricing::calendar::{select_surcharge, HolidayCalendar};
use fare_engine::pricing::rates::{default_tier, rates_for};
use fare_engine::pricing::{PricingError, RateConfig, ServiceType, SurchargeKind};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn service_type() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::Rideshare),
        Just(ServiceType::Courier),
        Just(ServiceType::Delivery),
    ]
}

/// Kilometres or minutes with two decimal places, 0 to 1000
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any representable decimal, including values near the type's limits
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn local_time() -> impl Strategy<Value = NaiveDateTime> {
    (2024i32..2030, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

fn tier_index() -> impl Strategy<Value = usize> {
    0usize..16
}

fn tier_of(service_type: ServiceType, index: usize) -> &'static str {
    let rates = rates_for(service_type);
    rates[index % rates.len()].tier
}

/// Rate with every surcharge defined and distinct multipliers
fn all_surcharges_rate() -> RateConfig {
    RateConfig {
        service_type: ServiceType::Rideshare,
        tier: "test",
        display_name: "Test",
        description: "Every surcharge defined",
        capacity: Some(4),
        base_fare: dec!(10),
        minimum_fare: dec!(20),
        per_km: dec!(2),
        per_min: dec!(0.5),
        commission_pct: dec!(20),
        night_multiplier: Some(dec!(1.5)),
        peak_multiplier: Some(dec!(1.2)),
        holiday_multiplier: Some(dec!(2.0)),
    }
}

proptest! {
    #[test]
    fn test_revenue_split_sums_to_fare(
        service_type in service_type(),
        tier in tier_index(),
        distance in quantity(),
        duration in quantity(),
        at in local_time(),
    ) {
        let fare = calculate_fare(
            service_type,
            tier_of(service_type, tier),
            distance,
            duration,
            at,
            &HolidayCalendar::new(),
        )
        .unwrap();

        prop_assert_eq!(fare.driver_earnings + fare.commission_amount, fare.actual_fare);
        prop_assert!(fare.commission_amount >= Decimal::ZERO);
        prop_assert!(fare.driver_earnings >= Decimal::ZERO);
    }

    #[test]
    fn test_actual_fare_never_below_minimum(
        service_type in service_type(),
        tier in tier_index(),
        distance in quantity(),
        duration in quantity(),
        at in local_time(),
    ) {
        let fare = calculate_fare(
            service_type,
            tier_of(service_type, tier),
            distance,
            duration,
            at,
            &HolidayCalendar::new(),
        )
        .unwrap();

        prop_assert!(fare.actual_fare >= fare.minimum_fare);
        if fare.total_fare < fare.minimum_fare {
            prop_assert!(fare.minimum_fare_applied);
            prop_assert_eq!(fare.actual_fare, fare.minimum_fare);
        } else {
            prop_assert!(!fare.minimum_fare_applied);
            prop_assert_eq!(fare.actual_fare, fare.total_fare);
        }
    }

    #[test]
    fn test_fare_non_decreasing_in_distance(
        service_type in service_type(),
        tier in tier_index(),
        a in quantity(),
        b in quantity(),
        duration in quantity(),
        at in local_time(),
    ) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let tier = tier_of(service_type, tier);
        let calendar = HolidayCalendar::new();

        let short_fare = calculate_fare(service_type, tier, short, duration, at, &calendar).unwrap();
        let long_fare = calculate_fare(service_type, tier, long, duration, at, &calendar).unwrap();

        prop_assert!(short_fare.actual_fare <= long_fare.actual_fare);
    }

    #[test]
    fn test_unknown_tier_matches_default_tier(
        service_type in service_type(),
        suffix in "[a-z]{1,12}",
        distance in quantity(),
        duration in quantity(),
        at in local_time(),
    ) {
        let unknown = format!("no-such-tier-{suffix}");
        let calendar = HolidayCalendar::new();

        let fallback = calculate_fare(service_type, &unknown, distance, duration, at, &calendar).unwrap();
        let default =
            calculate_fare(service_type, default_tier(service_type), distance, duration, at, &calendar).unwrap();

        prop_assert_eq!(fallback, default);
    }

    #[test]
    fn test_any_input_prices_or_reports_out_of_range(
        service_type in service_type(),
        tier in tier_index(),
        distance in any_decimal(),
        duration in any_decimal(),
        at in local_time(),
    ) {
        let result = calculate_fare(
            service_type,
            tier_of(service_type, tier),
            distance,
            duration,
            at,
            &HolidayCalendar::new(),
        );

        match result {
            Ok(fare) => prop_assert!(fare.actual_fare >= fare.minimum_fare),
            Err(err) => prop_assert!(matches!(err, PricingError::AmountOutOfRange(_))),
        }
    }

    #[test]
    fn test_surcharge_is_one_of_the_configured_multipliers(
        service_type in service_type(),
        tier in tier_index(),
        at in local_time(),
    ) {
        let rate = &rates_for(service_type)[tier % rates_for(service_type).len()];
        let surcharge = select_surcharge(rate, at, &HolidayCalendar::new());

        match surcharge.kind {
            Some(kind) => prop_assert_eq!(Some(surcharge.multiplier), rate.multiplier_for(kind)),
            None => prop_assert_eq!(surcharge.multiplier, Decimal::ONE),
        }
    }

    #[test]
    fn test_holiday_beats_every_window(year in 2024i32..2030, hour in 0u32..24) {
        let rate = all_surcharges_rate();
        let christmas = NaiveDate::from_ymd_opt(year, 12, 25).unwrap().and_hms_opt(hour, 0, 0).unwrap();

        let surcharge = select_surcharge(&rate, christmas, &HolidayCalendar::new());
        prop_assert_eq!(surcharge.kind, Some(SurchargeKind::Holiday));
        prop_assert_eq!(surcharge.multiplier, dec!(2.0));
    }
}

#[test]
fn test_night_beats_peak_and_gaps_are_standard() {
    let rate = all_surcharges_rate();
    let calendar = HolidayCalendar::new();

    for hour in 0..24 {
        let at = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        let expected = match hour {
            22 | 23 | 0..=4 => Some(SurchargeKind::Night),
            6..=8 | 15..=18 => Some(SurchargeKind::Peak),
            _ => None,
        };
        assert_eq!(select_surcharge(&rate, at, &calendar).kind, expected, "hour {hour}");
    }
}

#[test]
fn test_surcharges_never_stack() {
    let rate = all_surcharges_rate();
    // Old Year's Night at 23:00 matches both holiday and night
    let at = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();

    let surcharge = select_surcharge(&rate, at, &HolidayCalendar::new());
    let fare = price_trip(&rate, dec!(10), dec!(10), surcharge).unwrap();

    // 10 + 20 + 5 = 35, doubled once, not 35 × 2.0 × 1.5
    assert_eq!(fare.subtotal, dec!(35));
    assert_eq!(fare.total_fare, dec!(70));
}

#[test]
fn test_rideshare_options_five_km_fifteen_minutes() {
    let noon = NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let options = rideshare_options(dec!(5), dec!(15), noon, &HolidayCalendar::new()).unwrap();

    assert_eq!(options.len(), rates_for(ServiceType::Rideshare).len());
    assert_eq!(options.len(), 4);

    let fares: Vec<Decimal> = options.iter().map(|o| o.fare.actual_fare).collect();
    // economy 15+22.5+15, standard 20+27.5+18.75, premium 35+40+30, xl 30+35+22.5
    assert_eq!(fares, vec![dec!(52.5), dec!(66.25), dec!(105), dec!(87.5)]);
}
