use crate::calendar::{checked_jdn, date_from_fields, CalendarKind, CalendarSystem};
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_MONTHS, JANUARY, LEAP_YEAR_CYCLE,
};
use crate::julian::{gregorian_to_jdn, jdn_to_gregorian, JulianDay};
use crate::types::CivilDate;
use crate::CalendarError;

/// The proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gregorian;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > GREGORIAN_MONTHS {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// New Year's Day and Christmas, by Gregorian month and day.
pub(crate) const fn is_fixed_holiday(month: u8, day: u8) -> bool {
    matches!((month, day), (JANUARY, 1) | (DECEMBER, 25))
}

impl CalendarSystem for Gregorian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
    }

    fn months_in_year(&self) -> u8 {
        GREGORIAN_MONTHS
    }

    fn days_in_month(&self, year: u16, month: u8) -> u8 {
        days_in_month(year, month)
    }

    fn is_leap_year(&self, year: u16) -> bool {
        is_leap_year(year)
    }

    fn fields_to_instant(&self, year: u16, month: u8, day: u8) -> JulianDay {
        JulianDay::new(gregorian_to_jdn(
            i64::from(year),
            i64::from(month),
            i64::from(day),
        ))
    }

    fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError> {
        let (year, month, day) = jdn_to_gregorian(checked_jdn(self, instant)?);
        date_from_fields(self, instant, year, month, day)
    }

    fn is_holiday_on(&self, instant: JulianDay) -> bool {
        instant
            .gregorian_month_day()
            .is_some_and(|(month, day)| is_fixed_holiday(month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gregorian;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                Gregorian.is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                Gregorian.days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(Gregorian.days_in_month(2024, 2), 29);
        assert_eq!(Gregorian.days_in_month(2000, 2), 29);
        assert_eq!(Gregorian.days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_nonexistent_month() {
        assert_eq!(Gregorian.days_in_month(2024, 0), 0);
        assert_eq!(Gregorian.days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_round_trip_1900_to_2100() {
        let mut date = gregorian(1900, 1, 1);
        let end = gregorian(2100, 12, 31);
        let mut expected = date.to_instant();
        while date <= end {
            let instant = Gregorian.to_instant(date).unwrap();
            assert_eq!(instant, expected, "{date} is not one day after its predecessor");
            assert_eq!(Gregorian.from_instant(instant), Ok(date));
            expected = instant + 1;
            date = Gregorian.add_days(date, 1).unwrap();
        }
    }

    #[test]
    fn test_domain_edges() {
        let first = gregorian(1, 1, 1);
        let last = gregorian(9999, 12, 31);
        assert_eq!(Gregorian.from_instant(first.to_instant()), Ok(first));
        assert_eq!(Gregorian.from_instant(last.to_instant()), Ok(last));
        assert!(matches!(
            Gregorian.from_instant(last.to_instant() + 1),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            Gregorian.from_instant(first.to_instant() - 1),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_holidays() {
        assert_eq!(Gregorian.is_holiday(gregorian(2024, 1, 1)), Ok(true));
        assert_eq!(Gregorian.is_holiday(gregorian(2024, 12, 25)), Ok(true));
        assert_eq!(Gregorian.is_holiday(gregorian(2024, 12, 24)), Ok(false));
        assert_eq!(Gregorian.is_holiday(gregorian(2024, 9, 11)), Ok(false));
        assert!(!Gregorian.is_holiday_on(JulianDay::new(i64::MAX)));
    }
}
