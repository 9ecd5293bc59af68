//! Type definitions and constants for schedule rendering.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an interview event.
///
/// The value is whatever the event source recorded; nothing in this crate
/// transitions an event between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Rescheduled => "rescheduled",
        };
        f.write_str(name)
    }
}

/// A single interview on the schedule.
///
/// The binning logic reads only `date` and `status`; the remaining fields
/// are display payload carried through from the event source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Opaque identifier assigned by the event source.
    pub id: String,
    pub title: String,
    pub candidate: String,
    #[serde(default)]
    pub interviewers: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Local date and time the interview takes place.
    pub date: NaiveDateTime,
    pub status: EventStatus,
}

impl CalendarEvent {
    /// One-line description used by agenda and upcoming listings.
    pub fn summary_line(&self) -> String {
        format!("{} ({})  [{}]", self.title, self.candidate, self.status)
    }
}

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Rendering context containing all resolved display options.
#[derive(Clone, Debug)]
pub struct ScheduleContext {
    /// First day of the week in the grid.
    pub week_start: Weekday,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Reference instant for the upcoming listing.
    pub now: NaiveDateTime,
    /// Whether to show the year in month headers.
    pub show_year_in_header: bool,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
    /// Whether to center the date range when displaying multiple months.
    pub span: bool,
    /// Interviews listed per day in agenda views before "+N more".
    pub max_per_day: usize,
}

/// Calendar cells for a single month.
///
/// Leading `None` cells pad the days before the first of the month, then
/// one dated cell per day follows. The grid carries no trailing padding;
/// renderers wrap rows in groups of 7.
#[derive(Debug)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<NaiveDate>>,
}

// Constants for schedule formatting
pub const MONTH_WIDTH: usize = 20; // 7 day cells, 2 chars each, single-space separated
pub const GUTTER_WIDTH_REGULAR: usize = 2;
pub const GUTTER_WIDTH_YEAR: usize = 3;
pub const DEFAULT_MAX_PER_DAY: usize = 3;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
