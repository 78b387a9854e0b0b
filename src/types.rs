use crate::CalendarError;
use crate::calendar::{CalendarKind, CalendarSystem};
use crate::consts::{DATE_SEPARATOR, DAYS_PER_WEEK, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::julian::JulianDay;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidComponent` if the value is outside `1..=9999`.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN_YEAR..=MAX_YEAR).contains(v))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::InvalidComponent {
                component: "year",
                value,
            })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value in the range `1..=MAX_MONTH` (1..=13)
/// Whether month 13 exists is up to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidComponent` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidComponent {
                component: "month",
                value,
            })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the range `1..=MAX_DAY` (1..=31)
/// The calendar that builds a `CivilDate` checks it against the month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidComponent` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_DAY)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidComponent {
                component: "day",
                value,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered Monday = 0 through Sunday = 6.
///
/// This is the only numbering the crate uses. Locale tables, weekend checks and
/// grid alignment all index by it; Sunday-first layouts rotate at the edge
/// (see [`crate::FirstWeekday`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in canonical order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the weekday for an index in `0..=6`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` for indexes above 6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday(index))
    }

    /// Weekday of a day count whose day 0 is a Monday
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_day_count(days: i64) -> Self {
        Self::ALL[days.rem_euclid(DAYS_PER_WEEK as i64) as usize]
    }

    /// Index with Monday = 0 … Sunday = 6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Saturday and Sunday
    #[inline]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Number of days from `start` forward to `self` (0..=6)
    #[inline]
    pub const fn days_since(self, start: Self) -> u8 {
        (self.index() + DAYS_PER_WEEK - start.index()) % DAYS_PER_WEEK
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Which weekday a week row starts on in a rendered month.
///
/// Only layout changes; weekday numbering stays Monday = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstWeekday {
    #[default]
    Monday,
    Sunday,
}

impl FirstWeekday {
    /// The weekday in the first column
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Monday,
            Self::Sunday => Weekday::Sunday,
        }
    }

    /// Weekdays in column order
    pub fn columns(self) -> [Weekday; 7] {
        let start = self.weekday().index();
        let mut columns = Weekday::ALL;
        for (offset, column) in (0_i64..).zip(columns.iter_mut()) {
            *column = Weekday::from_day_count(i64::from(start) + offset);
        }
        columns
    }
}

/// A date in the native fields of the calendar that built it.
///
/// The calendar tag travels with the fields, so a date is only ever read by the
/// rules that validated it. Calendar operations given a date built by another
/// calendar fail with `CalendarError::InvalidDate`; use
/// [`CivilDate::convert_to`] to move a date between calendars. Build one through
/// [`crate::CalendarSystem::date`] rather than assembling components by hand.
///
/// Serializes as `{"calendar": "ethiopian", "date": "2016-13-05"}` and is
/// validated against its calendar again when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredDate", into = "StoredDate")]
pub struct CivilDate {
    calendar: CalendarKind,
    year:     Year,
    month:    Month,
    day:      Day,
}

impl CivilDate {
    pub(crate) const fn from_parts(
        calendar: CalendarKind,
        year: Year,
        month: Month,
        day: Day,
    ) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Returns the calendar these fields belong to
    #[inline]
    pub const fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)` as plain integers
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Instant of this date, read with its own calendar's rules
    pub fn to_instant(&self) -> JulianDay {
        self.calendar
            .fields_to_instant(self.year(), self.month(), self.day())
    }

    /// Weekday of this date
    pub fn weekday(&self) -> Weekday {
        self.to_instant().weekday()
    }

    /// The same day in `target`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if `target` cannot represent the day.
    pub fn convert_to(&self, target: CalendarKind) -> Result<Self, CalendarError> {
        target.from_instant(self.to_instant())
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = DATE_SEPARATOR;
        write!(f, "{:04}{sep}{:02}{sep}{:02}", self.year(), self.month(), self.day())
    }
}

/// Wire form of a `CivilDate`
#[derive(Serialize, Deserialize)]
struct StoredDate {
    calendar: CalendarKind,
    date:     String,
}

impl From<CivilDate> for StoredDate {
    fn from(date: CivilDate) -> Self {
        Self {
            calendar: date.calendar,
            date:     date.to_string(),
        }
    }
}

impl TryFrom<StoredDate> for CivilDate {
    type Error = CalendarError;

    fn try_from(stored: StoredDate) -> Result<Self, Self::Error> {
        let (year, month, day) = parse_fields(&stored.date)
            .ok_or_else(|| CalendarError::MalformedDate(stored.date.clone()))?;
        stored.calendar.date(year, month, day)
    }
}

/// Splits `YYYY-MM-DD` into its numbers.
fn parse_fields(text: &str) -> Option<(i32, u8, u8)> {
    let mut parts = text.trim().split(DATE_SEPARATOR);
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((year, month, day))
}
