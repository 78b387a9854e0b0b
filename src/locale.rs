//! Month and weekday names per language.
//!
//! Weekday tables are indexed Monday = 0 … Sunday = 6. Month tables hold 12
//! Gregorian month names, or 13 Ethiopian month names for the languages that
//! name months after the Ethiopian year (Amharic, Afaan Oromo).

use crate::calendar::CalendarKind;
use crate::prelude::*;
use crate::types::{FirstWeekday, Weekday};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Name tables of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    pub month_names:     &'static [&'static str],
    pub day_names:       [&'static str; 7],
    pub day_names_short: [&'static str; 7],
}

/// Ethiopian month names in Amharic, Meskerem through Pagume.
pub static ETHIOPIAN_MONTH_NAMES: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ኅዳር", "ታኅሳስ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ", "ነሐሴ",
    "ጳጉሜ",
];

pub static ENGLISH: Locale = Locale {
    month_names:     &[
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    day_names:       [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    day_names_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

pub static AMHARIC: Locale = Locale {
    month_names:     &ETHIOPIAN_MONTH_NAMES,
    day_names:       ["ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"],
    day_names_short: ["ሰኞ", "ማክሰ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"],
};

pub static ARABIC: Locale = Locale {
    month_names:     &[
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
        "نوفمبر", "ديسمبر",
    ],
    day_names:       ["الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد"],
    day_names_short: ["اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت", "أحد"],
};

pub static OROMO: Locale = Locale {
    month_names:     &[
        "Fuulbaana",
        "Onkolooleessaa",
        "Sadaasaa",
        "Muddee",
        "Ammajjii",
        "Gurraandhala",
        "Bitooteessaa",
        "Ebla",
        "Caamsaa",
        "Waxabajjii",
        "Adoolessa",
        "Hagayya",
        "Qaamee",
    ],
    day_names:       [
        "Wiixata", "Kibxata", "Roobii", "Khamisa", "Jimaata", "Sanbata", "Dilbata",
    ],
    day_names_short: ["Wi", "Kib", "Ro", "Ka", "Ji", "Sa", "Di"],
};

impl Locale {
    /// Name of a month from this locale's own table (1-based)
    pub fn month_name(&self, month: u8) -> Option<&'static str> {
        let index = usize::from(month).checked_sub(1)?;
        self.month_names.get(index).copied()
    }

    /// Name of a month of `calendar`.
    ///
    /// Ethiopian months come from this locale when it names all 13, otherwise
    /// from the Amharic table. Other calendars index the locale's own table.
    pub fn month_name_in(&self, calendar: CalendarKind, month: u8) -> Option<&'static str> {
        match calendar {
            CalendarKind::Ethiopian if self.month_names.len() != ETHIOPIAN_MONTH_NAMES.len() => {
                let index = usize::from(month).checked_sub(1)?;
                ETHIOPIAN_MONTH_NAMES.get(index).copied()
            }
            _ => self.month_name(month),
        }
    }

    pub const fn day_name(&self, weekday: Weekday) -> &'static str {
        self.day_names[weekday.index() as usize]
    }

    pub const fn day_name_short(&self, weekday: Weekday) -> &'static str {
        self.day_names_short[weekday.index() as usize]
    }

    /// Short weekday names in the column order of a rendered week
    pub fn weekday_headers(&self, first: FirstWeekday) -> [&'static str; 7] {
        first.columns().map(|weekday| self.day_name_short(weekday))
    }
}

/// Language tag: `en`, `am`, `ar` or `oro`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "am")]
    Am,
    #[display(fmt = "ar")]
    Ar,
    #[display(fmt = "oro")]
    Oro,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 4] = [Self::En, Self::Am, Self::Ar, Self::Oro];

    /// The name tables of this language
    pub const fn locale(self) -> &'static Locale {
        match self {
            Self::En => &ENGLISH,
            Self::Am => &AMHARIC,
            Self::Ar => &ARABIC,
            Self::Oro => &OROMO,
        }
    }
}

impl FromStr for Language {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.to_string().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CalendarError::UnknownLanguage(s.to_owned()))
    }
}
