//! Month-grid construction using Zeller's congruence for weekday math.
//!
//! Everything here is a pure function of year and month integers; nothing
//! reads the clock or the host timezone, so grids come out identical on
//! every machine.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Error, Result};
use crate::types::{ColumnsMode, MONTH_WIDTH, MonthGrid, ScheduleContext};

/// Check if a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    // Gregorian: divisible by 4, except centuries unless divisible by 400
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Weekday of the first day of a month, via Zeller's congruence.
pub fn first_weekday_of_month(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i % 100;
    let j: i32 = year_i / 100;

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => unreachable!(),
    }
}

impl ScheduleContext {
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                // month width + gutter, clamp to 1-3 for readability
                let month_width = MONTH_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

impl MonthGrid {
    /// Build the cell sequence for a month.
    ///
    /// The grid starts with one padding cell per day between the configured
    /// week start and the month's first weekday, then carries one dated cell
    /// per day. Its length is exactly `offset + days_in_month`; callers wrap
    /// rows in groups of 7.
    pub fn new(ctx: &ScheduleContext, year: i32, month: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(Error::InvalidDate { year, month });
        }

        let days = days_in_month(year, month);
        let first_day = first_weekday_of_month(year, month);
        let offset = first_day.days_since(ctx.week_start) as usize;

        let mut cells: Vec<Option<NaiveDate>> = Vec::with_capacity(offset + days as usize);
        for _ in 0..offset {
            cells.push(None);
        }
        for day in 1..=days {
            // day <= days_in_month, so the date is always valid
            cells.push(Some(NaiveDate::from_ymd_opt(year, month, day).unwrap()));
        }

        Ok(MonthGrid { year, month, cells })
    }

    /// Build the grid for the month containing `date` (day-of-month is ignored).
    pub fn for_date(ctx: &ScheduleContext, date: NaiveDate) -> Result<Self> {
        Self::new(ctx, date.year(), date.month())
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
