use crate::calendar::{CalendarKind, CalendarSystem};
use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::types::FirstWeekday;
use crate::CalendarError;
use serde::Serialize;
use std::fmt;

/// One month laid out in week rows of seven cells.
///
/// A `0` cell is padding before day 1 or after the last day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MonthGrid {
    rows: Vec<[u8; 7]>,
}

impl MonthGrid {
    /// Week rows, top to bottom
    pub fn rows(&self) -> &[[u8; 7]] {
        &self.rows
    }

    /// Number of week rows
    pub fn weeks(&self) -> usize {
        self.rows.len()
    }

    /// Day numbers in reading order, padding skipped
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().copied().filter(|&day| day != 0)
    }

    /// `(row, column)` of a day, if the month has it
    pub fn position_of(&self, day: u8) -> Option<(usize, usize)> {
        if day == 0 {
            return None;
        }
        self.rows.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|&cell| cell == day)
                .map(|column| (row, column))
        })
    }

    /// Takes the week rows out of the grid
    pub fn into_rows(self) -> Vec<[u8; 7]> {
        self.rows
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for week in &self.rows {
            let line = week
                .iter()
                .map(|&day| {
                    if day == 0 {
                        "  ".to_owned()
                    } else {
                        format!("{day:>2}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Lays out `month` of `year` in `calendar`, starting each row on `first`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the month does not exist in
/// `calendar` (month 0, month 13 outside the Ethiopian calendar, an
/// unsupported year).
pub fn build_grid(
    calendar: CalendarKind,
    year: i32,
    month: u8,
    first: FirstWeekday,
) -> Result<MonthGrid, CalendarError> {
    let first_day = calendar.date(year, month, MIN_DAY)?;
    let days_in_month = calendar.days_in_month(first_day.year(), month);
    let leading = first_day.weekday().days_since(first.weekday());

    let week = usize::from(DAYS_PER_WEEK);
    let cells = (usize::from(leading) + usize::from(days_in_month)).div_ceil(week) * week;

    let mut flat = vec![0_u8; cells];
    for (cell, day) in flat[usize::from(leading)..].iter_mut().zip(1..=days_in_month) {
        *cell = day;
    }

    let rows = flat
        .chunks_exact(week)
        .map(|chunk| {
            let mut row = [0_u8; 7];
            row.copy_from_slice(chunk);
            row
        })
        .collect();

    Ok(MonthGrid { rows })
}
