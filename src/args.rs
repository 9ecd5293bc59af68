//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the cal convention: `[[day] month] year`.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use clap::{Parser, ValueHint};

use crate::calendar::days_in_month;
use crate::error::{Result, argument_error};
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, DEFAULT_MAX_PER_DAY, EventStatus, GUTTER_WIDTH_REGULAR,
    ScheduleContext,
};

#[derive(Parser, Debug)]
#[command(name = "schedcal")]
#[command(about = "Displays the interview schedule for a month or year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// First day of the week (name or abbreviation, e.g. "wed").
    #[arg(long, help_heading = "Calendar options", value_name = "day")]
    pub week_start: Option<String>,

    /// Display whole year.
    #[arg(short = 'y', long, help_heading = "Display options")]
    pub year: bool,

    /// Display three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// Number of months to display.
    #[arg(
        short = 'n',
        long = "months",
        help_heading = "Display options",
        value_name = "num"
    )]
    pub months_count: Option<u32>,

    /// Show only a single month (default).
    #[arg(short = '1', long = "one", help_heading = "Display options")]
    pub one_month: bool,

    /// Span the date when displaying multiple months (center around current month).
    #[arg(short = 'S', long = "span", help_heading = "Display options")]
    pub span: bool,

    /// JSON file with interview events.
    #[arg(
        short = 'e',
        long,
        help_heading = "Event options",
        value_name = "file",
        value_hint = ValueHint::FilePath
    )]
    pub events: Option<PathBuf>,

    /// List the interviews of each day below the grid.
    #[arg(short = 'a', long, help_heading = "Event options")]
    pub agenda: bool,

    /// Interviews listed per day before "+N more".
    #[arg(
        long,
        help_heading = "Event options",
        value_name = "num",
        default_value_t = DEFAULT_MAX_PER_DAY
    )]
    pub max_per_day: usize,

    /// Show the next N scheduled interviews.
    #[arg(short = 'u', long, help_heading = "Event options", value_name = "num")]
    pub upcoming: Option<usize>,

    /// Only show events with this status.
    #[arg(long, help_heading = "Event options", value_name = "status")]
    pub status: Option<EventStatus>,

    /// Day (1-31) - optional; shows that day's agenda.
    #[arg(index = 1, default_value = None, value_name = "day", value_hint = ValueHint::Other)]
    pub day_arg: Option<String>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 2, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 3, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display the interview schedule, or some part of it.

Without any arguments, display the current month.

Examples:
  schedcal                           Display current month
  schedcal -3                        Display three months (prev, current, next)
  schedcal -y                        Display the whole year
  schedcal 2 2026                    Display February 2026
  schedcal -e events.json -a         Current month with per-day agenda
  schedcal -e events.json -u 5       Show the next five scheduled interviews
  schedcal 15 3 2026 -e events.json  Agenda for March 15, 2026
  schedcal --week-start wed          Start grid rows on Wednesday";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl ScheduleContext {
    pub fn new(args: &Args) -> Result<Self> {
        let now = get_now();
        let today = now.date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| argument_error(format!("Invalid columns value: {}", s)))?;
                if n == 0 {
                    return Err(argument_error("Columns must be positive"));
                }
                ColumnsMode::Fixed(n)
            }
        };

        // Prevent conflicting display modes
        let mode_count = [args.year, args.three_months, args.months_count.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        if mode_count > 1 {
            return Err(argument_error("Options -y, -3, and -n are mutually exclusive"));
        }

        if let Some(year_str) = &args.year_arg {
            let year: i32 = year_str
                .parse()
                .map_err(|_| argument_error(format!("Invalid year value: {}", year_str)))?;
            if !(1..=9999).contains(&year) {
                return Err(argument_error(format!(
                    "Invalid year value: {} (must be 1-9999)",
                    year
                )));
            }
        }

        Ok(ScheduleContext {
            week_start: resolve_week_start(args)?,
            color,
            today,
            now,
            show_year_in_header: true,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
            span: args.span,
            max_per_day: args.max_per_day,
        })
    }
}

/// Resolve the week start from flags, `--week-start`, or the Sunday default.
fn resolve_week_start(args: &Args) -> Result<Weekday> {
    if args.sunday && args.monday {
        return Err(argument_error("Options -s and -m are mutually exclusive"));
    }
    if args.monday {
        return Ok(Weekday::Mon);
    }
    if args.sunday {
        return Ok(Weekday::Sun);
    }
    match args.week_start.as_deref() {
        Some(s) => s
            .parse::<Weekday>()
            .map_err(|_| argument_error(format!("Invalid week start: {}", s))),
        None => Ok(Weekday::Sun),
    }
}

/// Get the current instant, respecting SCHEDCAL_TEST_TIME for testing.
pub fn get_now() -> NaiveDateTime {
    if let Ok(test_time) = std::env::var("SCHEDCAL_TEST_TIME") {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&test_time, "%Y-%m-%d %H:%M") {
            return dt;
        }
        if let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).unwrap();
        }
    }
    chrono::Local::now().naive_local()
}

/// Calculate display date from positional arguments.
///
/// Argument patterns:
/// - 1 arg: year (4 digits) or month (1-2 digits)
/// - 2 args: month year
/// - 3 args: day month year
pub fn get_display_date(args: &Args) -> Result<(i32, u32, Option<u32>)> {
    let today = get_now().date();

    let day_provided = args.day_arg.is_some();
    let month_provided = args.month_arg.is_some();
    let year_provided = args.year_arg.is_some();

    match (day_provided, month_provided, year_provided) {
        // One argument: could be year (4 digits) or month (1-2 digits)
        (true, false, false) => {
            let val = args.day_arg.as_ref().unwrap();
            if let Ok(num) = val.parse::<i32>() {
                // 4 digits = year
                if (1000..=9999).contains(&num) {
                    return Ok((num, today.month(), None));
                }
                // 1-2 digits = month
                if (1..=12).contains(&num) {
                    return Ok((today.year(), num as u32, None));
                }
            }
            // Try parsing as month name
            if let Some(month) = crate::formatter::parse_month(val) {
                return Ok((today.year(), month, None));
            }
            Err(argument_error(format!("Invalid argument: {}", val)))
        }
        // Two arguments: month year (e.g., schedcal 2 2026)
        (true, true, false) => {
            let month = crate::formatter::parse_month(args.day_arg.as_ref().unwrap())
                .ok_or_else(|| {
                    argument_error(format!("Invalid month: {}", args.day_arg.as_ref().unwrap()))
                })?;
            let year = args
                .month_arg
                .as_ref()
                .unwrap()
                .parse::<i32>()
                .map_err(|_| {
                    argument_error(format!("Invalid year: {}", args.month_arg.as_ref().unwrap()))
                })?;
            if !(1..=9999).contains(&year) {
                return Err(argument_error(format!(
                    "Invalid year: {} (must be 1-9999)",
                    year
                )));
            }
            Ok((year, month, None))
        }
        // Three arguments: day month year
        (true, true, true) => {
            let day = args.day_arg.as_ref().unwrap().parse::<u32>().map_err(|_| {
                argument_error(format!("Invalid day: {}", args.day_arg.as_ref().unwrap()))
            })?;
            let month = crate::formatter::parse_month(args.month_arg.as_ref().unwrap())
                .ok_or_else(|| {
                    argument_error(format!(
                        "Invalid month: {}",
                        args.month_arg.as_ref().unwrap()
                    ))
                })?;
            let year = args
                .year_arg
                .as_ref()
                .unwrap()
                .parse::<i32>()
                .map_err(|_| {
                    argument_error(format!("Invalid year: {}", args.year_arg.as_ref().unwrap()))
                })?;
            if !(1..=9999).contains(&year) {
                return Err(argument_error(format!(
                    "Invalid year: {} (must be 1-9999)",
                    year
                )));
            }
            if !(1..=days_in_month(year, month)).contains(&day) {
                return Err(argument_error(format!(
                    "Invalid day: {} (month {} has {} days)",
                    day,
                    month,
                    days_in_month(year, month)
                )));
            }
            Ok((year, month, Some(day)))
        }
        // No arguments: current month
        (false, false, false) => Ok((today.year(), today.month(), None)),
        // Invalid combinations
        _ => Err(argument_error("Invalid argument combination")),
    }
}
