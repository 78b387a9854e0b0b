use crate::calendar::CalendarKind;

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A calendar tag other than `gregorian`, `ethiopian` or `islamic`.
    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    /// A language tag other than `en`, `am`, `ar` or `oro`.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// A format mode other than `full`, `short` or `medium`.
    #[error("Unknown format mode: {0}")]
    UnknownFormatMode(String),

    /// A year, month or day value outside the range any calendar accepts.
    #[error("Invalid {component}: {value}")]
    InvalidComponent { component: &'static str, value: i64 },

    /// Weekday index outside `0..=6`.
    #[error("Invalid weekday: {0} (must be 0-6, Monday = 0)")]
    InvalidWeekday(u8),

    /// A year, month or day component outside the calendar's range.
    #[error("Invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: CalendarKind,
        year:     i64,
        month:    i64,
        day:      i64,
    },

    /// Stored date text that is not `YYYY-MM-DD`.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// An instant that falls outside the calendar's supported years.
    #[error("Julian day {jdn} is outside the supported {calendar} range")]
    OutOfRange { calendar: CalendarKind, jdn: i64 },
}

impl CalendarError {
    pub(crate) fn invalid_date(
        calendar: CalendarKind,
        year: impl Into<i64>,
        month: impl Into<i64>,
        day: impl Into<i64>,
    ) -> Self {
        Self::InvalidDate {
            calendar,
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}
