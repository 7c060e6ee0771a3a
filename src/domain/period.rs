//! Date-range presets for admin listings.

use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};

/// Calendar window for a listing.
///
/// Each preset resolves to a half-open `[since, until)` range relative to
/// "now", which the repositories apply to the entity's main timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    AnyDate,
    Today,
    PastSevenDays,
    ThisMonth,
    ThisYear,
}

impl Period {
    /// Lower bound of the period, or `None` for [`Period::AnyDate`].
    pub fn since(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let midnight = |dt: DateTime<Utc>| dt.date_naive().and_time(NaiveTime::MIN).and_utc();

        match self {
            Period::AnyDate => None,
            Period::Today => Some(midnight(now)),
            Period::PastSevenDays => Some(midnight(now - Duration::days(7))),
            Period::ThisMonth => now.with_day(1).map(midnight),
            Period::ThisYear => now.with_ordinal(1).map(midnight),
        }
    }

    /// Exclusive upper bound of the period, or `None` for [`Period::AnyDate`].
    pub fn until(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let tomorrow = now.date_naive().and_time(NaiveTime::MIN).and_utc() + Duration::days(1);

        match self {
            Period::AnyDate => None,
            Period::Today | Period::PastSevenDays => Some(tomorrow),
            Period::ThisMonth => self
                .since(now)
                .and_then(|first| first.checked_add_months(Months::new(1))),
            Period::ThisYear => self
                .since(now)
                .and_then(|first| first.checked_add_months(Months::new(12))),
        }
    }
}
