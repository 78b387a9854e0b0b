//! The Ethiopian calendar: twelve 30-day months followed by Pagume, which has
//! 5 days, or 6 in the year before a year divisible by 4.
//!
//! Dates map to the instant axis through the Julian Day Number of the
//! Ethiopian epoch (1-01-01), counting 365 days a year plus one leap day every
//! fourth year.

use crate::calendar::{checked_jdn, date_from_fields, CalendarKind, CalendarSystem};
use crate::consts::{
    DAYS_PER_LEAP_CYCLE, DAYS_PER_YEAR, ETHIOPIAN_EPOCH_JDN, ETHIOPIAN_LEAP_REMAINDER,
    ETHIOPIAN_MONTHS, ETHIOPIAN_MONTH_DAYS, JANUARY, LEAP_YEAR_CYCLE, PAGUME, PAGUME_DAYS,
    PAGUME_DAYS_LEAP, SEPTEMBER,
};
use crate::gregorian::{self, Gregorian};
use crate::julian::JulianDay;
use crate::types::CivilDate;
use crate::CalendarError;

/// The Ethiopian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ethiopian;

pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == ETHIOPIAN_LEAP_REMAINDER
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1..=12 => ETHIOPIAN_MONTH_DAYS,
        PAGUME if is_leap_year(year) => PAGUME_DAYS_LEAP,
        PAGUME => PAGUME_DAYS,
        _ => 0,
    }
}

/// Julian Day Number of an Ethiopian date.
const fn ethiopian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let month_days = ETHIOPIAN_MONTH_DAYS as i64;
    day + (month - 1) * month_days
        + (year - 1) * DAYS_PER_YEAR
        + year.div_euclid(LEAP_YEAR_CYCLE as i64)
        + ETHIOPIAN_EPOCH_JDN
        - 1
}

/// Ethiopian `(year, month, day)` of a Julian Day Number.
fn jdn_to_ethiopian(jdn: i64) -> (i64, i64, i64) {
    let cycle_days = jdn - ETHIOPIAN_EPOCH_JDN;
    let estimate =
        (cycle_days - (cycle_days + DAYS_PER_YEAR + 1).div_euclid(DAYS_PER_LEAP_CYCLE))
            .div_euclid(DAYS_PER_YEAR)
            + 1;

    let mut year = estimate;
    while ethiopian_to_jdn(year + 1, 1, 1) <= jdn {
        year += 1;
    }
    while ethiopian_to_jdn(year, 1, 1) > jdn {
        year -= 1;
    }
    if year != estimate {
        tracing::trace!(jdn, estimate, year, "refined Ethiopian year estimate");
    }

    let month_days = i64::from(ETHIOPIAN_MONTH_DAYS);
    let day_of_year = jdn - ethiopian_to_jdn(year, 1, 1) + 1;
    let month = (day_of_year - 1).div_euclid(month_days) + 1;
    let day = day_of_year - (month - 1) * month_days;
    (year, month, day)
}

impl CalendarSystem for Ethiopian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Ethiopian
    }

    fn months_in_year(&self) -> u8 {
        ETHIOPIAN_MONTHS
    }

    fn days_in_month(&self, year: u16, month: u8) -> u8 {
        days_in_month(year, month)
    }

    fn is_leap_year(&self, year: u16) -> bool {
        is_leap_year(year)
    }

    fn fields_to_instant(&self, year: u16, month: u8, day: u8) -> JulianDay {
        JulianDay::new(ethiopian_to_jdn(
            i64::from(year),
            i64::from(month),
            i64::from(day),
        ))
    }

    fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError> {
        let (year, month, day) = jdn_to_ethiopian(checked_jdn(self, instant)?);
        date_from_fields(self, instant, year, month, day)
    }

    /// Enkutatash (Sep 11) and Timkat (Jan 19) on the Gregorian side of the
    /// same day, then the Gregorian holidays.
    fn is_holiday_on(&self, instant: JulianDay) -> bool {
        instant.gregorian_month_day().is_some_and(|(month, day)| {
            matches!((month, day), (SEPTEMBER, 11) | (JANUARY, 19))
                || gregorian::is_fixed_holiday(month, day)
        })
    }
}

/// Ethiopian date of a Gregorian date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `date` is not a Gregorian date and
/// `CalendarError::OutOfRange` for Gregorian days before Ethiopian year 1
/// (before 8-08-27).
pub fn gregorian_to_ethiopian(date: CivilDate) -> Result<CivilDate, CalendarError> {
    Ethiopian.from_instant(Gregorian.to_instant(date)?)
}

/// Gregorian date of an Ethiopian date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `date` is not an Ethiopian date and
/// `CalendarError::OutOfRange` for Ethiopian days after Gregorian 9999.
pub fn ethiopian_to_gregorian(date: CivilDate) -> Result<CivilDate, CalendarError> {
    Gregorian.from_instant(Ethiopian.to_instant(date)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_YEAR;
    use crate::test_utils::{ethiopian, gregorian};

    #[test]
    fn test_epoch() {
        let epoch = ethiopian(1, 1, 1);
        let instant = Ethiopian.to_instant(epoch).unwrap();
        assert_eq!(instant.jdn(), ETHIOPIAN_EPOCH_JDN);
        assert!((instant.as_julian_date() - 1_724_220.5).abs() < f64::EPSILON);
        assert_eq!(ethiopian_to_gregorian(epoch), Ok(gregorian(8, 8, 27)));
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            gregorian:   (i32, u8, u8),
            ethiopian:   (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian:   (2017, 6, 12),
                ethiopian:   (2009, 10, 5),
                description: "reference demo date",
            },
            TestCase {
                gregorian:   (2024, 9, 11),
                ethiopian:   (2017, 1, 1),
                description: "Enkutatash 2017",
            },
            TestCase {
                gregorian:   (2023, 9, 12),
                ethiopian:   (2016, 1, 1),
                description: "Enkutatash after a leap Pagume",
            },
            TestCase {
                gregorian:   (2023, 9, 11),
                ethiopian:   (2015, 13, 6),
                description: "sixth day of Pagume",
            },
            TestCase {
                gregorian:   (2024, 1, 1),
                ethiopian:   (2016, 4, 22),
                description: "Gregorian new year",
            },
            TestCase {
                gregorian:   (2024, 1, 20),
                ethiopian:   (2016, 5, 11),
                description: "Timkat in a year after a leap Pagume",
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let (ey, em, ed) = case.ethiopian;
            let greg = gregorian(gy, gm, gd);
            let eth = ethiopian(i32::from(ey), em, ed);
            assert_eq!(
                gregorian_to_ethiopian(greg),
                Ok(eth),
                "{}: Gregorian to Ethiopian",
                case.description
            );
            assert_eq!(
                ethiopian_to_gregorian(eth),
                Ok(greg),
                "{}: Ethiopian to Gregorian",
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(Ethiopian.is_leap_year(2015));
        assert!(Ethiopian.is_leap_year(2011));
        assert!(!Ethiopian.is_leap_year(2016));
        assert!(!Ethiopian.is_leap_year(2012));
        assert_eq!(Ethiopian.days_in_month(2015, 13), 6);
        assert_eq!(Ethiopian.days_in_month(2016, 13), 5);
        for month in 1..=12 {
            assert_eq!(Ethiopian.days_in_month(2016, month), 30);
        }
        assert_eq!(Ethiopian.days_in_month(2016, 14), 0);
    }

    #[test]
    fn test_pagume_length_matches_year_length() {
        for year in 1990..2030 {
            let start = Ethiopian.to_instant(ethiopian(year, 1, 1)).unwrap();
            let next = Ethiopian.to_instant(ethiopian(year + 1, 1, 1)).unwrap();
            let year_u16 = u16::try_from(year).unwrap();
            let expected = 360 + i64::from(Ethiopian.days_in_month(year_u16, PAGUME));
            assert_eq!(next - start, expected, "Ethiopian year {year}");
        }
    }

    #[test]
    fn test_round_trip_whole_domain() {
        for year in 1..=MAX_YEAR {
            for month in 1..=ETHIOPIAN_MONTHS {
                for day in 1..=Ethiopian.days_in_month(year, month) {
                    let date = ethiopian(i32::from(year), month, day);
                    let instant = Ethiopian.to_instant(date).unwrap();
                    assert_eq!(Ethiopian.from_instant(instant), Ok(date), "{date}");
                }
            }
        }
    }

    #[test]
    fn test_composite_round_trip() {
        for year in 1890..=2095 {
            for month in 1..=ETHIOPIAN_MONTHS {
                let year_u16 = u16::try_from(year).unwrap();
                for day in 1..=Ethiopian.days_in_month(year_u16, month) {
                    let eth = ethiopian(year, month, day);
                    let greg = ethiopian_to_gregorian(eth).unwrap();
                    assert_eq!(gregorian_to_ethiopian(greg), Ok(eth), "{eth} via {greg}");
                    assert_eq!(
                        Ethiopian.weekday(eth).unwrap(),
                        Gregorian.weekday(greg).unwrap(),
                        "{eth} and {greg} fall on different weekdays"
                    );
                }
            }
        }
    }

    #[test]
    fn test_before_epoch_is_out_of_range() {
        let before = Gregorian.to_instant(gregorian(8, 8, 26)).unwrap();
        assert_eq!(
            Ethiopian.from_instant(before),
            Err(CalendarError::OutOfRange {
                calendar: CalendarKind::Ethiopian,
                jdn:      before.jdn(),
            })
        );
        assert!(gregorian_to_ethiopian(gregorian(1, 1, 1)).is_err());
    }

    #[test]
    fn test_holidays() {
        let holiday = |y, m, d| Ethiopian.is_holiday(gregorian_to_ethiopian(gregorian(y, m, d))?);
        // Enkutatash and Timkat by their Gregorian day
        assert_eq!(holiday(2024, 9, 11), Ok(true));
        assert_eq!(holiday(2024, 1, 19), Ok(true));
        // Gregorian fallbacks
        assert_eq!(holiday(2024, 1, 1), Ok(true));
        assert_eq!(holiday(2024, 12, 25), Ok(true));
        assert_eq!(holiday(2024, 6, 12), Ok(false));
    }

    #[test]
    fn test_gregorian_fields_are_not_read_as_ethiopian() {
        let greg = gregorian(2024, 1, 31);
        assert_eq!(
            Ethiopian.to_instant(greg),
            Err(CalendarError::invalid_date(CalendarKind::Ethiopian, 2024, 1, 31))
        );
        assert!(Ethiopian.is_holiday(gregorian(2024, 9, 11)).is_err());
        assert!(matches!(
            ethiopian_to_gregorian(greg),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            gregorian_to_ethiopian(ethiopian(2015, 13, 6)),
            Err(CalendarError::InvalidDate { .. })
        ));
    }
}
