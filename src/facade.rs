//! One calendar and one language bundled behind the operations a date picker
//! needs. All date arguments and results are in the active calendar.

use crate::calendar::{CalendarKind, CalendarSystem};
use crate::config::CalendarConfig;
use crate::format::{self, FormatMode};
use crate::grid::{self, MonthGrid};
use crate::julian::JulianDay;
use crate::locale::{Language, Locale};
use crate::types::{CivilDate, FirstWeekday, Weekday};
use crate::CalendarError;
use serde::Serialize;
use tracing::{debug, warn};

/// The active calendar system, language and week layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calendar {
    kind:          CalendarKind,
    language:      Language,
    first_weekday: FirstWeekday,
}

/// Everything a date cell or tooltip shows about one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub formatted:     String,
    pub day_name:      String,
    pub month_name:    String,
    pub year:          u16,
    pub month:         u8,
    pub day:           u8,
    /// Monday = 0 … Sunday = 6
    pub weekday:       u8,
    pub is_weekend:    bool,
    pub is_holiday:    bool,
    pub calendar_type: CalendarKind,
    pub language:      Language,
}

impl Calendar {
    /// A calendar of `kind` named in `language`, with Monday-first weeks
    pub fn new(kind: CalendarKind, language: Language) -> Self {
        debug!(calendar = %kind, language = %language, "calendar created");
        Self {
            kind,
            language,
            first_weekday: FirstWeekday::default(),
        }
    }

    /// Builds a calendar from boundary tags. An unknown calendar tag falls back
    /// to Gregorian and an unknown language tag to English.
    pub fn from_tags(calendar: &str, language: &str) -> Self {
        let kind = calendar.parse().unwrap_or_else(|err: CalendarError| {
            warn!(%err, "falling back to {}", CalendarKind::default());
            CalendarKind::default()
        });
        let language = language.parse().unwrap_or_else(|err: CalendarError| {
            warn!(%err, "falling back to {}", Language::default());
            Language::default()
        });
        Self::new(kind, language)
    }

    /// Builds a calendar from stored settings, with the same tag fallback as
    /// [`Calendar::from_tags`].
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::from_tags(&config.calendar, &config.language).with_first_weekday(config.first_weekday)
    }

    /// Returns this calendar with week rows starting on `first_weekday`
    #[must_use]
    pub const fn with_first_weekday(mut self, first_weekday: FirstWeekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// The active calendar system
    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// The active language
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The weekday grid rows start on
    pub const fn first_weekday(&self) -> FirstWeekday {
        self.first_weekday
    }

    /// Name tables of the active language
    pub const fn locale(&self) -> &'static Locale {
        self.language.locale()
    }

    /// Builds a validated date in the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if a component is out of range.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<CivilDate, CalendarError> {
        self.kind.date(year, month, day)
    }

    /// Today's local date in the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` only if the host clock is outside
    /// the supported years.
    pub fn today(&self) -> Result<CivilDate, CalendarError> {
        let instant = JulianDay::from(chrono::Local::now().date_naive());
        self.kind.from_instant(instant)
    }

    /// Instant of a date of the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn instant(&self, date: CivilDate) -> Result<JulianDay, CalendarError> {
        self.kind.to_instant(date)
    }

    /// Date of the active calendar on the day `instant`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the active calendar cannot represent the day.
    pub fn from_instant(&self, instant: JulianDay) -> Result<CivilDate, CalendarError> {
        self.kind.from_instant(instant)
    }

    /// Converts a Gregorian date into the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `date` is not Gregorian and
    /// `CalendarError::OutOfRange` if the active calendar cannot represent the day.
    pub fn from_gregorian(&self, date: CivilDate) -> Result<CivilDate, CalendarError> {
        CalendarKind::Gregorian.convert(date, self.kind)
    }

    /// Carries a date of any calendar over to the same day in the active one,
    /// as when the calendar is switched while a date stays selected.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the active calendar cannot represent the day.
    pub fn adopt(&self, date: CivilDate) -> Result<CivilDate, CalendarError> {
        date.convert_to(self.kind)
    }

    /// Converts a date of the active calendar into the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar and
    /// `CalendarError::OutOfRange` if the day is past Gregorian 9999.
    pub fn to_gregorian(&self, date: CivilDate) -> Result<CivilDate, CalendarError> {
        self.kind.convert(date, CalendarKind::Gregorian)
    }

    /// Renders a date of the active calendar in the active language.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn format_date(&self, date: CivilDate, mode: FormatMode) -> Result<String, CalendarError> {
        format::format_date(self.kind, self.instant(date)?, self.locale(), mode)
    }

    /// Expands a `%Y %y %m %d` pattern with the fields of a date of the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn format_pattern(&self, date: CivilDate, pattern: &str) -> Result<String, CalendarError> {
        format::format_pattern(self.kind, self.instant(date)?, pattern)
    }

    /// Week rows of a month of the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month does not exist.
    pub fn get_month_calendar(&self, year: i32, month: u8) -> Result<MonthGrid, CalendarError> {
        grid::build_grid(self.kind, year, month, self.first_weekday)
    }

    /// Name of a month of the active calendar in the active language.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidComponent` if the calendar has no such month.
    pub fn get_month_name(&self, month: u8) -> Result<&'static str, CalendarError> {
        Some(month)
            .filter(|m| (1..=self.kind.months_in_year()).contains(m))
            .and_then(|m| self.locale().month_name_in(self.kind, m))
            .ok_or(CalendarError::InvalidComponent {
                component: "month",
                value:     i64::from(month),
            })
    }

    /// Full weekday name in the active language
    pub const fn get_day_name(&self, weekday: Weekday) -> &'static str {
        self.locale().day_name(weekday)
    }

    /// Short weekday name in the active language
    pub const fn get_day_name_short(&self, weekday: Weekday) -> &'static str {
        self.locale().day_name_short(weekday)
    }

    /// Short weekday names in grid column order
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        self.locale().weekday_headers(self.first_weekday)
    }

    /// Moves a date of the active calendar by whole days.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar and
    /// `CalendarError::OutOfRange` if the result leaves the supported years.
    pub fn add_days(&self, date: CivilDate, days: i64) -> Result<CivilDate, CalendarError> {
        self.kind.add_days(date, days)
    }

    /// Moves a date of the active calendar by whole months, clamping the day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar or
    /// if the result leaves the supported years.
    pub fn add_months(&self, date: CivilDate, months: i64) -> Result<CivilDate, CalendarError> {
        self.kind.add_months(date, months)
    }

    /// Weekday of a date of the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn weekday(&self, date: CivilDate) -> Result<Weekday, CalendarError> {
        self.kind.weekday(date)
    }

    /// Whether a date of the active calendar falls on Saturday or Sunday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn is_weekend(&self, date: CivilDate) -> Result<bool, CalendarError> {
        Ok(self.weekday(date)?.is_weekend())
    }

    /// Whether a date of the active calendar is a fixed holiday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn is_holiday(&self, date: CivilDate) -> Result<bool, CalendarError> {
        self.kind.is_holiday(date)
    }

    /// Snapshot of everything shown for a date of the active calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a date of another calendar.
    pub fn get_date_info(&self, date: CivilDate) -> Result<DateInfo, CalendarError> {
        let weekday = self.weekday(date)?;
        Ok(DateInfo {
            formatted:     self.format_date(date, FormatMode::Full)?,
            day_name:      self.get_day_name(weekday).to_owned(),
            month_name:    self.get_month_name(date.month())?.to_owned(),
            year:          date.year(),
            month:         date.month(),
            day:           date.day(),
            weekday:       weekday.index(),
            is_weekend:    weekday.is_weekend(),
            is_holiday:    self.is_holiday(date)?,
            calendar_type: self.kind,
            language:      self.language,
        })
    }
}
