/// Minimum valid year in every calendar (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year in every calendar (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Largest month number any supported calendar uses (Ethiopian Pagume)
pub const MAX_MONTH: u8 = 13;
/// Largest day number any supported calendar uses
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Months in a Gregorian (and simplified Islamic) year
pub const GREGORIAN_MONTHS: u8 = 12;
/// Months in an Ethiopian year, Pagume included
pub const ETHIOPIAN_MONTHS: u8 = 13;
/// Ethiopian month number of Pagume
pub const PAGUME: u8 = 13;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each of the twelve regular Ethiopian months
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;
/// Days in Pagume for a common year
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for a leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
/// Ethiopian leap years are the ones leaving this remainder modulo 4
pub(crate) const ETHIOPIAN_LEAP_REMAINDER: u16 = 3;

/// Julian Day Number of Ethiopian 1-01-01 (Julian Date 1724220.5 at midnight)
pub const ETHIOPIAN_EPOCH_JDN: i64 = 1_724_221;
/// Julian Day Number of Gregorian 0001-01-01
pub const GREGORIAN_EPOCH_JDN: i64 = 1_721_426;
/// Days in a 4-year Julian leap cycle
pub(crate) const DAYS_PER_LEAP_CYCLE: i64 = 1461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Largest distance from JDN 0 the conversion formulas accept
pub(crate) const JDN_ARITHMETIC_LIMIT: u64 = 1 << 40;
/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Fixed offset between the Gregorian year and the displayed Islamic year.
/// This is a linear approximation with no lunar correction.
pub const ISLAMIC_YEAR_OFFSET: u16 = 579;
/// Suffix appended to full Islamic dates (Anno Hegirae)
pub const HIJRI_SUFFIX: &str = "هـ";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator used by the short format mode
pub const SHORT_FORMAT_SEPARATOR: char = '/';
/// Pattern used when the caller supplies none
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d";
