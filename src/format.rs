use crate::calendar::{CalendarKind, CalendarSystem};
use crate::consts::{HIJRI_SUFFIX, SHORT_FORMAT_SEPARATOR};
use crate::julian::JulianDay;
use crate::locale::Locale;
use crate::prelude::*;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which fields and word forms a formatted date contains.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// Weekday name, month name, day and year
    #[default]
    #[display(fmt = "full")]
    Full,
    /// Numeric month/day/year
    #[display(fmt = "short")]
    Short,
    /// Month name, day and year
    #[display(fmt = "medium")]
    Medium,
}

impl FormatMode {
    pub const ALL: [Self; 3] = [Self::Full, Self::Short, Self::Medium];
}

impl FromStr for FormatMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CalendarError::UnknownFormatMode(s.to_owned()))
    }
}

/// Renders the day `instant` in `calendar` with the names of `locale`.
///
/// Gregorian and Ethiopian dates share the templates
/// `"{weekday}, {month} {day}, {year}"` (full), `"{month}/{day}/{year}"`
/// (short) and `"{month} {day}, {year}"` (medium). Islamic dates put the day
/// first and mark full dates with the Hijri suffix.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `calendar` cannot represent the day.
pub fn format_date(
    calendar: CalendarKind,
    instant: JulianDay,
    locale: &Locale,
    mode: FormatMode,
) -> Result<String, CalendarError> {
    let date = calendar.from_instant(instant)?;
    let (year, month, day) = date.to_tuple();
    let sep = SHORT_FORMAT_SEPARATOR;
    let month_name = locale.month_name_in(calendar, month).unwrap_or_default();

    let formatted = match (calendar, mode) {
        (_, FormatMode::Short) => format!("{month}{sep}{day}{sep}{year}"),
        (CalendarKind::Islamic, FormatMode::Full) => {
            format!("{day} {month_name} {year} {HIJRI_SUFFIX}")
        }
        (CalendarKind::Islamic, FormatMode::Medium) => format!("{day} {month_name} {year}"),
        (_, FormatMode::Full) => {
            let weekday = locale.day_name(instant.weekday());
            format!("{weekday}, {month_name} {day}, {year}")
        }
        (_, FormatMode::Medium) => format!("{month_name} {day}, {year}"),
    };
    Ok(formatted)
}

/// Expands `%Y` (year), `%y` (two-digit year), `%m` (two-digit month) and
/// `%d` (two-digit day) in `pattern` with the fields of `instant` in
/// `calendar`. Other text, including unknown `%` sequences, is copied as is.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `calendar` cannot represent the day.
pub fn format_pattern(
    calendar: CalendarKind,
    instant: JulianDay,
    pattern: &str,
) -> Result<String, CalendarError> {
    let date = calendar.from_instant(instant)?;
    let (year, month, day) = date.to_tuple();

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let field = match chars.peek() {
            Some('Y') => year.to_string(),
            Some('y') => format!("{:02}", year % 100),
            Some('m') => format!("{month:02}"),
            Some('d') => format!("{day:02}"),
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push_str(&field);
        chars.next();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{AMHARIC, ARABIC, ENGLISH, OROMO};
    use crate::test_utils::{gregorian, instant_of};

    #[test]
    fn test_gregorian_modes() {
        let instant = instant_of(gregorian(2024, 1, 1));
        let cal = CalendarKind::Gregorian;
        assert_eq!(
            format_date(cal, instant, &ENGLISH, FormatMode::Full).unwrap(),
            "Monday, January 1, 2024"
        );
        assert_eq!(
            format_date(cal, instant, &ENGLISH, FormatMode::Short).unwrap(),
            "1/1/2024"
        );
        assert_eq!(
            format_date(cal, instant, &ENGLISH, FormatMode::Medium).unwrap(),
            "January 1, 2024"
        );
    }

    #[test]
    fn test_gregorian_with_other_locales() {
        let instant = instant_of(gregorian(2024, 3, 15));
        assert_eq!(
            format_date(CalendarKind::Gregorian, instant, &ARABIC, FormatMode::Full).unwrap(),
            "الجمعة, مارس 15, 2024"
        );
    }

    #[test]
    fn test_ethiopian_modes() {
        // Gregorian 2017-06-12 (a Monday) is Ethiopian 2009-10-05
        let instant = instant_of(gregorian(2017, 6, 12));
        let cal = CalendarKind::Ethiopian;
        assert_eq!(
            format_date(cal, instant, &AMHARIC, FormatMode::Full).unwrap(),
            "ሰኞ, ሰኔ 5, 2009"
        );
        assert_eq!(
            format_date(cal, instant, &AMHARIC, FormatMode::Short).unwrap(),
            "10/5/2009"
        );
        assert_eq!(
            format_date(cal, instant, &AMHARIC, FormatMode::Medium).unwrap(),
            "ሰኔ 5, 2009"
        );
    }

    #[test]
    fn test_ethiopian_month_names_by_locale() {
        let instant = instant_of(gregorian(2024, 9, 11));
        let cal = CalendarKind::Ethiopian;
        assert_eq!(
            format_date(cal, instant, &ENGLISH, FormatMode::Full).unwrap(),
            "Wednesday, መስከረም 1, 2017"
        );
        assert_eq!(
            format_date(cal, instant, &OROMO, FormatMode::Medium).unwrap(),
            "Fuulbaana 1, 2017"
        );
    }

    #[test]
    fn test_islamic_modes() {
        let instant = instant_of(gregorian(2024, 3, 15));
        let cal = CalendarKind::Islamic;
        assert_eq!(
            format_date(cal, instant, &ARABIC, FormatMode::Full).unwrap(),
            "15 مارس 1445 هـ"
        );
        assert_eq!(
            format_date(cal, instant, &ARABIC, FormatMode::Short).unwrap(),
            "3/15/1445"
        );
        assert_eq!(
            format_date(cal, instant, &ENGLISH, FormatMode::Medium).unwrap(),
            "15 March 1445"
        );
    }

    #[test]
    fn test_out_of_range_instant() {
        let instant = instant_of(gregorian(5, 1, 1));
        assert!(matches!(
            format_date(CalendarKind::Ethiopian, instant, &AMHARIC, FormatMode::Full),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_pattern_tokens() {
        struct TestCase {
            pattern:     &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let instant = instant_of(gregorian(2024, 3, 5));
        let cases = [
            TestCase {
                pattern:     "%Y-%m-%d",
                expected:    "2024-03-05",
                description: "ISO layout",
            },
            TestCase {
                pattern:     "%d/%m/%y",
                expected:    "05/03/24",
                description: "two-digit year",
            },
            TestCase {
                pattern:     "%y%Y",
                expected:    "242024",
                description: "adjacent year tokens do not collide",
            },
            TestCase {
                pattern:     "%Y%%m",
                expected:    "2024%03",
                description: "literal percent before a token",
            },
            TestCase {
                pattern:     "%q %",
                expected:    "%q %",
                description: "unknown and trailing percent copied",
            },
            TestCase {
                pattern:     "",
                expected:    "",
                description: "empty pattern",
            },
        ];

        for case in &cases {
            assert_eq!(
                format_pattern(CalendarKind::Gregorian, instant, case.pattern).unwrap(),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_pattern_in_ethiopian_fields() {
        let instant = instant_of(gregorian(2017, 6, 12));
        assert_eq!(
            format_pattern(CalendarKind::Ethiopian, instant, "%d.%m.%Y (%y)").unwrap(),
            "05.10.2009 (09)"
        );
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("full".parse::<FormatMode>(), Ok(FormatMode::Full));
        assert_eq!("Short".parse::<FormatMode>(), Ok(FormatMode::Short));
        assert_eq!("medium".parse::<FormatMode>(), Ok(FormatMode::Medium));
        assert_eq!(
            "long".parse::<FormatMode>(),
            Err(CalendarError::UnknownFormatMode("long".into()))
        );
    }
}
