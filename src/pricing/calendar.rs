//! Holiday calendar and demand windows.
//!
//! Surcharge windows are evaluated against Trinidad local wall-clock time.
//! Trinidad does not observe daylight saving, so a fixed offset is enough.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};

use super::models::{RateConfig, Surcharge, SurchargeKind};

/// Trinidad and Tobago (America/Port_of_Spain) is UTC-4 all year
pub const TRINIDAD_UTC_OFFSET_HOURS: i32 = -4;

/// Year-independent holidays as (month, day)
const FIXED_HOLIDAYS: [(u32, u32); 7] = [
    (1, 1),   // New Year's Day
    (2, 14),  // Valentine's Day
    (3, 30),  // Spiritual Baptist Liberation Day
    (12, 24), // Christmas Eve
    (12, 25), // Christmas Day
    (12, 26), // Boxing Day
    (12, 31), // Old Year's Night
];

/// Days that attract the holiday surcharge.
///
/// The fixed list repeats every year. Moveable holidays (Carnival,
/// Good Friday, Easter Monday, Corpus Christi, Eid, Divali) have no fixed
/// date, so they are supplied as explicit dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    fixed: Vec<(u32, u32)>,
    dated: Vec<NaiveDate>,
}

impl HolidayCalendar {
    /// Calendar with only the fixed yearly holidays
    pub fn new() -> Self {
        Self {
            fixed: FIXED_HOLIDAYS.to_vec(),
            dated: Vec::new(),
        }
    }

    /// Add one-off holiday dates on top of the fixed list
    pub fn with_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.dated.extend(dates);
        self.dated.sort_unstable();
        self.dated.dedup();
        self
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed.contains(&(date.month(), date.day())) || self.dated.binary_search(&date).is_ok()
    }

    pub fn extra_dates(&self) -> &[NaiveDate] {
        &self.dated
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

/// 22:00 to 05:00
pub fn is_night(hour: u32) -> bool {
    hour >= 22 || hour < 5
}

/// 06:00 to 09:00 and 15:00 to 19:00
pub fn is_peak(hour: u32) -> bool {
    (6..9).contains(&hour) || (15..19).contains(&hour)
}

/// Build a fixed offset from whole hours east of UTC
pub fn utc_offset(hours: i32) -> Option<FixedOffset> {
    hours.checked_mul(3600).and_then(FixedOffset::east_opt)
}

/// Convert an instant to local wall-clock time at the given offset
pub fn to_local(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&offset).naive_local()
}

/// Pick the surcharge for a rate at a local time.
///
/// Holiday beats night beats peak. A window only counts when the rate
/// defines a multiplier for it; otherwise evaluation falls through.
pub fn select_surcharge(rate: &RateConfig, local: NaiveDateTime, calendar: &HolidayCalendar) -> Surcharge {
    let hour = local.hour();

    SurchargeKind::PRECEDENCE
        .into_iter()
        .filter(|kind| match kind {
            SurchargeKind::Holiday => calendar.is_holiday(local.date()),
            SurchargeKind::Night => is_night(hour),
            SurchargeKind::Peak => is_peak(hour),
        })
        .find_map(|kind| {
            rate.multiplier_for(kind).map(|multiplier| Surcharge {
                kind: Some(kind),
                multiplier,
            })
        })
        .unwrap_or_else(Surcharge::standard)
}
