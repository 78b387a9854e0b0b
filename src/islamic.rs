//! Simplified Islamic (Hijri) calendar.
//!
//! This is a fixed-offset approximation, not lunar arithmetic: the Islamic
//! year is the Gregorian year minus 579 and month and day are the Gregorian
//! month and day. Displayed years can be off by one and month names do not
//! follow the lunar months.

use crate::calendar::{checked_jdn, date_from_fields, CalendarKind, CalendarSystem};
use crate::consts::{GREGORIAN_MONTHS, ISLAMIC_YEAR_OFFSET, MAX_YEAR};
use crate::gregorian::{self, Gregorian};
use crate::julian::{gregorian_to_jdn, jdn_to_gregorian, JulianDay};
use crate::types::CivilDate;
use crate::CalendarError;

/// The simplified Islamic calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Islamic;

const fn gregorian_year(year: u16) -> u16 {
    year.saturating_add(ISLAMIC_YEAR_OFFSET)
}

impl CalendarSystem for Islamic {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Islamic
    }

    fn months_in_year(&self) -> u8 {
        GREGORIAN_MONTHS
    }

    fn days_in_month(&self, year: u16, month: u8) -> u8 {
        gregorian::days_in_month(gregorian_year(year), month)
    }

    fn is_leap_year(&self, year: u16) -> bool {
        gregorian::is_leap_year(gregorian_year(year))
    }

    fn max_year(&self) -> u16 {
        MAX_YEAR - ISLAMIC_YEAR_OFFSET
    }

    fn fields_to_instant(&self, year: u16, month: u8, day: u8) -> JulianDay {
        JulianDay::new(gregorian_to_jdn(
            i64::from(gregorian_year(year)),
            i64::from(month),
            i64::from(day),
        ))
    }

    fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError> {
        let (year, month, day) = jdn_to_gregorian(checked_jdn(self, instant)?);
        date_from_fields(self, instant, year - i64::from(ISLAMIC_YEAR_OFFSET), month, day)
    }

    fn is_holiday_on(&self, instant: JulianDay) -> bool {
        Gregorian.is_holiday_on(instant)
    }
}
