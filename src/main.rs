//! Interview schedule CLI application.
//!
//! # Usage
//! ```ignore
//! schedcal                      // Current month
//! schedcal 2026                 // Year 2026
//! schedcal 2 2026               // February 2026
//! schedcal -3                   // Three months
//! schedcal -y                   // Whole year
//! schedcal -e events.json -a    // Current month with agenda
//! ```

use chrono::NaiveDate;
use tracing::debug;

use schedcal::args::{Args, get_display_date};
use schedcal::error::Result;
use schedcal::formatter::{
    format_agenda, format_day_agenda, format_upcoming, print_month, print_months_count,
    print_three_months, print_year,
};
use schedcal::store::load_events;
use schedcal::types::{CalendarEvent, MonthGrid, ScheduleContext};

fn main() {
    init_tracing();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("schedcal: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let ctx = ScheduleContext::new(args)?;
    let (year, month, day) = get_display_date(args)?;

    let mut events = match &args.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };
    if let Some(status) = args.status {
        events.retain(|e| e.status == status);
    }
    debug!(count = events.len(), year, month, "rendering schedule");

    // Display mode priority: year > three_months > months_count > single
    if args.year {
        print_year(&ctx, year, &events)?;
    } else if args.three_months {
        print_three_months(&ctx, year, month, &events)?;
    } else if let Some(count) = args.months_count {
        print_months_count(&ctx, year, month, count, &events)?;
    } else {
        print_month(&ctx, year, month, &events)?;
    }

    // A day positional scopes the agenda to that day
    if args.agenda || day.is_some() {
        print_agenda_section(&ctx, year, month, day, &events)?;
    }

    if let Some(limit) = args.upcoming {
        println!();
        for line in format_upcoming(&ctx, &events, limit) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn print_agenda_section(
    ctx: &ScheduleContext,
    year: i32,
    month: u32,
    day: Option<u32>,
    events: &[CalendarEvent],
) -> Result<()> {
    let lines = match day {
        Some(d) => {
            // day is validated against the month length in get_display_date
            let date = NaiveDate::from_ymd_opt(year, month, d).unwrap();
            let lines = format_day_agenda(ctx, date, events);
            if lines.is_empty() {
                println!();
                println!("No interviews on {}", date.format("%Y-%m-%d"));
                return Ok(());
            }
            lines
        }
        None => {
            let grid = MonthGrid::new(ctx, year, month)?;
            format_agenda(ctx, &grid, events)
        }
    };

    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
