//! Conversion between the Gregorian, Ethiopian and Islamic calendars.
//!
//! Every date is anchored to a [`JulianDay`], the integer day number shared by
//! all calendars. A calendar system maps its `(year, month, day)` fields to and
//! from that number, so converting between two calendars goes through the
//! instant and keeps the weekday.
//!
//! ```
//! use civil_calendar::{Calendar, CalendarKind, CalendarSystem, FormatMode, Language};
//!
//! let calendar = Calendar::new(CalendarKind::Ethiopian, Language::Am);
//! let gregorian = CalendarKind::Gregorian.date(2017, 6, 12)?;
//! let date = calendar.from_gregorian(gregorian)?;
//!
//! assert_eq!(date.to_string(), "2009-10-05");
//! assert_eq!(calendar.format_date(date, FormatMode::Full)?, "ሰኞ, ሰኔ 5, 2009");
//! # Ok::<(), civil_calendar::CalendarError>(())
//! ```
//!
//! The Islamic calendar here is a fixed-offset approximation: the year is the
//! Gregorian year minus 579 and the month and day are the Gregorian ones.

mod calendar;
mod config;
mod consts;
mod error;
mod ethiopian;
mod facade;
mod format;
mod gregorian;
mod grid;
mod islamic;
mod julian;
mod locale;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarKind, CalendarSystem};
pub use config::CalendarConfig;
pub use consts::*;
pub use error::CalendarError;
pub use ethiopian::{Ethiopian, ethiopian_to_gregorian, gregorian_to_ethiopian};
pub use facade::{Calendar, DateInfo};
pub use format::{FormatMode, format_date, format_pattern};
pub use gregorian::Gregorian;
pub use grid::{MonthGrid, build_grid};
pub use islamic::Islamic;
pub use julian::JulianDay;
pub use locale::{AMHARIC, ARABIC, ENGLISH, ETHIOPIAN_MONTH_NAMES, Language, Locale, OROMO};
pub use types::{CivilDate, Day, FirstWeekday, Month, Weekday, Year};
