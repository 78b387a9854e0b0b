//! The capability set every calendar system implements, and the tag that picks one.

use crate::consts::{JANUARY, MAX_YEAR};
use crate::ethiopian::Ethiopian;
use crate::gregorian::Gregorian;
use crate::islamic::Islamic;
use crate::julian::JulianDay;
use crate::prelude::*;
use crate::types::{CivilDate, Day, Month, Weekday, Year};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Conversion and arithmetic for one calendar system.
///
/// Implementors supply the calendar-specific rules (month lengths, the mapping
/// to and from [`JulianDay`], fixed holidays). Validation, month arithmetic and
/// day arithmetic are shared and built on top of those rules.
pub trait CalendarSystem {
    /// Tag of this calendar
    fn kind(&self) -> CalendarKind;

    /// Number of months in every year of this calendar
    fn months_in_year(&self) -> u8;

    /// Length of the given month, or 0 if the month does not exist
    fn days_in_month(&self, year: u16, month: u8) -> u8;

    /// Leap-year rule of this calendar
    fn is_leap_year(&self, year: u16) -> bool;

    /// Instant of `(year, month, day)` read as fields of this calendar.
    /// The fields are expected to have passed [`CalendarSystem::date`].
    fn fields_to_instant(&self, year: u16, month: u8, day: u8) -> JulianDay;

    /// Date in this calendar for an instant
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the instant falls outside the
    /// years this calendar supports.
    fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError>;

    /// Fixed-date holiday check for the day `instant`
    fn is_holiday_on(&self, instant: JulianDay) -> bool;

    /// Largest year this calendar supports
    fn max_year(&self) -> u16 {
        MAX_YEAR
    }

    /// Builds a date after checking every component against this calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a year outside the supported
    /// range, a month this calendar lacks, or a day past the end of the month.
    fn date(&self, year: i32, month: u8, day: u8) -> Result<CivilDate, CalendarError> {
        let invalid = || CalendarError::invalid_date(self.kind(), year, month, day);

        let y = Year::new(i64::from(year)).map_err(|_| invalid())?;
        if y.get() > self.max_year() {
            return Err(invalid());
        }
        let m = Month::new(i64::from(month)).map_err(|_| invalid())?;
        if m.get() > self.months_in_year() {
            return Err(invalid());
        }
        let d = Day::new(i64::from(day)).map_err(|_| invalid())?;
        if d.get() > self.days_in_month(y.get(), m.get()) {
            return Err(invalid());
        }

        Ok(CivilDate::from_parts(self.kind(), y, m, d))
    }

    /// Passes `date` through if this calendar built it.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    fn ensure_own(&self, date: CivilDate) -> Result<CivilDate, CalendarError> {
        if date.calendar() == self.kind() {
            Ok(date)
        } else {
            Err(CalendarError::invalid_date(
                self.kind(),
                date.year(),
                date.month(),
                date.day(),
            ))
        }
    }

    /// Instant of a date this calendar built.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    fn to_instant(&self, date: CivilDate) -> Result<JulianDay, CalendarError> {
        let (year, month, day) = self.ensure_own(date)?.to_tuple();
        Ok(self.fields_to_instant(year, month, day))
    }

    /// Fixed-date holiday check for a date this calendar built.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    fn is_holiday(&self, date: CivilDate) -> Result<bool, CalendarError> {
        Ok(self.is_holiday_on(self.to_instant(date)?))
    }

    /// Moves the date by whole months, carrying into the year and saturating the
    /// day at the end of a shorter month (Jan 31 + 1 month = Feb 28/29).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar or
    /// if the resulting year is unsupported.
    fn add_months(&self, date: CivilDate, delta: i64) -> Result<CivilDate, CalendarError> {
        let date = self.ensure_own(date)?;
        let per_year = i64::from(self.months_in_year());
        let index = (i64::from(date.month()) - 1).saturating_add(delta);
        let year = i64::from(date.year()).saturating_add(index.div_euclid(per_year));
        let month = u8::try_from(index.rem_euclid(per_year) + 1).unwrap_or(JANUARY);

        let overflow = || CalendarError::invalid_date(self.kind(), year, month, date.day());
        let year = i32::try_from(year).map_err(|_| overflow())?;
        let year_u16 = u16::try_from(year).map_err(|_| overflow())?;

        let day = date.day().min(self.days_in_month(year_u16, month));
        self.date(year, month, day)
    }

    /// Moves the date by whole days through the instant axis.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar and
    /// `CalendarError::OutOfRange` if the result leaves the supported years.
    fn add_days(&self, date: CivilDate, delta: i64) -> Result<CivilDate, CalendarError> {
        let start = self.to_instant(date)?;
        let instant = start.checked_add_days(delta).ok_or(CalendarError::OutOfRange {
            calendar: self.kind(),
            jdn:      start.jdn().saturating_add(delta),
        })?;
        self.from_instant(instant)
    }

    /// Weekday of a date; the same in every calendar for the same instant.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    fn weekday(&self, date: CivilDate) -> Result<Weekday, CalendarError> {
        Ok(self.to_instant(date)?.weekday())
    }
}

/// Day number of `instant`, or `OutOfRange` if it is too far from the epochs
/// for the conversion formulas to run without overflow.
pub(crate) fn checked_jdn<C: CalendarSystem + ?Sized>(
    calendar: &C,
    instant: JulianDay,
) -> Result<i64, CalendarError> {
    if !instant.in_arithmetic_range() {
        return Err(CalendarError::OutOfRange {
            calendar: calendar.kind(),
            jdn:      instant.jdn(),
        });
    }
    Ok(instant.jdn())
}

/// Builds the date for `(year, month, day)` computed from `instant`, reporting
/// anything unrepresentable as an out-of-range instant.
pub(crate) fn date_from_fields<C: CalendarSystem + ?Sized>(
    calendar: &C,
    instant: JulianDay,
    year: i64,
    month: i64,
    day: i64,
) -> Result<CivilDate, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange {
        calendar: calendar.kind(),
        jdn:      instant.jdn(),
    };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let month = u8::try_from(month).map_err(|_| out_of_range())?;
    let day = u8::try_from(day).map_err(|_| out_of_range())?;
    calendar
        .date(year, month, day)
        .map_err(|_| out_of_range())
}

/// Calendar tag: `gregorian`, `ethiopian` or `islamic`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "ethiopian")]
    Ethiopian,
    #[display(fmt = "islamic")]
    Islamic,
}

impl CalendarKind {
    /// Every supported calendar
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Ethiopian, Self::Islamic];

    /// Converts a date of this calendar into the same day of `target`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `date` is not a date of this
    /// calendar and `CalendarError::OutOfRange` if `target` cannot represent
    /// the day.
    pub fn convert(self, date: CivilDate, target: Self) -> Result<CivilDate, CalendarError> {
        target.from_instant(self.to_instant(date)?)
    }
}

/// Statically dispatches a `CalendarSystem` method to the unit struct of a tag.
macro_rules! dispatch {
    ($kind:expr, $method:ident($($arg:expr),*)) => {
        match $kind {
            CalendarKind::Gregorian => Gregorian.$method($($arg),*),
            CalendarKind::Ethiopian => Ethiopian.$method($($arg),*),
            CalendarKind::Islamic => Islamic.$method($($arg),*),
        }
    };
}

impl CalendarSystem for CalendarKind {
    fn kind(&self) -> CalendarKind {
        *self
    }

    fn months_in_year(&self) -> u8 {
        dispatch!(self, months_in_year())
    }

    fn days_in_month(&self, year: u16, month: u8) -> u8 {
        dispatch!(self, days_in_month(year, month))
    }

    fn is_leap_year(&self, year: u16) -> bool {
        dispatch!(self, is_leap_year(year))
    }

    fn fields_to_instant(&self, year: u16, month: u8, day: u8) -> JulianDay {
        dispatch!(self, fields_to_instant(year, month, day))
    }

    fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError> {
        dispatch!(self, from_instant(instant))
    }

    fn is_holiday_on(&self, instant: JulianDay) -> bool {
        dispatch!(self, is_holiday_on(instant))
    }

    fn max_year(&self) -> u16 {
        dispatch!(self, max_year())
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CalendarError::UnknownCalendar(s.to_owned()))
    }
}
