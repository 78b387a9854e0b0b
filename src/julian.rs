//! The shared time axis every calendar converts through.

use crate::consts::{GREGORIAN_EPOCH_JDN, JDN_ARITHMETIC_LIMIT};
use crate::prelude::*;
use crate::types::Weekday;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Julian Day Number of a civil day.
///
/// Day `n` starts at Julian Date `n - 0.5` (midnight) and has its noon at `n`.
/// Integer storage keeps conversions exact; [`JulianDay::as_julian_date`] gives
/// the real-valued midnight form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a Julian Day Number
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the Julian Day Number
    #[inline]
    pub const fn jdn(self) -> i64 {
        self.0
    }

    /// Julian Date of this day's midnight (`jdn - 0.5`)
    #[allow(clippy::cast_precision_loss)]
    pub fn as_julian_date(self) -> f64 {
        self.0 as f64 - 0.5
    }

    /// Day containing the given real-valued Julian Date.
    /// Any time within the day maps to the same `JulianDay`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_julian_date(jd: f64) -> Self {
        Self((jd + 0.5).floor() as i64)
    }

    /// Adds days, returning `None` on overflow
    pub const fn checked_add_days(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(jdn) => Some(Self(jdn)),
            None => None,
        }
    }

    /// Weekday of this day; calendar-independent
    pub const fn weekday(self) -> Weekday {
        // JDN 0 fell on a Monday
        Weekday::from_day_count(self.0)
    }

    /// Whether the conversion formulas can run on this day without overflow
    pub(crate) const fn in_arithmetic_range(self) -> bool {
        self.0.unsigned_abs() <= JDN_ARITHMETIC_LIMIT
    }

    /// Gregorian `(month, day)` of this day, the fields holidays are keyed on
    pub(crate) fn gregorian_month_day(self) -> Option<(u8, u8)> {
        if !self.in_arithmetic_range() {
            return None;
        }
        let (_, month, day) = jdn_to_gregorian(self.0);
        Some((u8::try_from(month).ok()?, u8::try_from(day).ok()?))
    }

    /// Converts to a `chrono::NaiveDate` (proleptic Gregorian)
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let days_from_ce = i32::try_from(self.0 - GREGORIAN_EPOCH_JDN + 1).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.1}", self.as_julian_date())
    }
}

impl From<NaiveDate> for JulianDay {
    fn from(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()) + GREGORIAN_EPOCH_JDN - 1)
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self(self.0 - days)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

/// Julian Day Number of a proleptic Gregorian date (Fliegel–Van Flandern).
pub(crate) fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
pub(crate) fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year, month, day)
}
