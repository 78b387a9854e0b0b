use crate::consts::DEFAULT_PATTERN;
use crate::types::FirstWeekday;
use serde::{Deserialize, Serialize};

/// Settings a presentation layer hands to [`crate::Calendar::from_config`].
///
/// Every field is optional when deserializing. The calendar and language are
/// kept as raw tags so an unknown value falls back to the defaults at
/// construction time instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// `gregorian`, `ethiopian` or `islamic`
    pub calendar:      String,
    /// `en`, `am`, `ar` or `oro`
    pub language:      String,
    pub first_weekday: FirstWeekday,
    /// Pattern for [`crate::Calendar::format_pattern`] callers that store one
    pub pattern:       String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar:      "gregorian".to_owned(),
            language:      "en".to_owned(),
            first_weekday: FirstWeekday::default(),
            pattern:       DEFAULT_PATTERN.to_owned(),
        }
    }
}
