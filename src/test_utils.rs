use crate::calendar::{CalendarKind, CalendarSystem};
use crate::julian::JulianDay;
use crate::types::CivilDate;

pub fn gregorian(year: i32, month: u8, day: u8) -> CivilDate {
    CalendarKind::Gregorian.date(year, month, day).unwrap()
}

pub fn ethiopian(year: i32, month: u8, day: u8) -> CivilDate {
    CalendarKind::Ethiopian.date(year, month, day).unwrap()
}

pub fn islamic(year: i32, month: u8, day: u8) -> CivilDate {
    CalendarKind::Islamic.date(year, month, day).unwrap()
}

/// Instant of a date in its own calendar
pub fn instant_of(date: CivilDate) -> JulianDay {
    date.to_instant()
}
