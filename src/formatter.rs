//! Schedule formatting and display with localization and color support.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::events::{events_on_day, upcoming_events, visible_events_on_day};
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarEvent,
    GUTTER_WIDTH_YEAR, MONTH_WIDTH, MonthGrid, ScheduleContext,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Get month name for the current locale.
pub fn get_month_name(month: u32) -> String {
    let locale = get_system_locale();
    let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
    date.format_localized("%B", locale).to_string()
}

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        // Full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Format month header with optional year and color.
pub fn format_month_header(
    year: i32,
    month: u32,
    width: usize,
    show_year: bool,
    color: bool,
) -> String {
    let month_name = get_month_name(month);
    let header = if show_year {
        format!("{} {}", month_name, year)
    } else {
        month_name
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order starting from the configured week start.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Get 2-character weekday abbreviation for the given locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Format weekday header row with optional color.
pub fn format_weekday_headers(ctx: &ScheduleContext) -> String {
    let locale = get_system_locale();
    let mut result = String::new();

    let weekday_order = get_weekday_order(ctx.week_start);

    if ctx.color {
        result.push_str(COLOR_SAND_YELLOW);
    }

    for (i, &weekday) in weekday_order.iter().enumerate() {
        let short_name = get_weekday_short_name(weekday, locale);
        if i < 6 {
            result.push_str(&format!("{} ", short_name));
        } else {
            result.push_str(&short_name);
        }
    }

    if ctx.color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Format day cell with color highlighting.
///
/// Color priority: today > day with interviews > weekend > regular
fn format_day(ctx: &ScheduleContext, date: NaiveDate, has_events: bool, is_last: bool) -> String {
    let is_today = ctx.color && ctx.today == date;
    let is_weekend = ctx.color && ctx.is_weekend(date.weekday());
    let day_str = format!("{:>2}", date.day());

    let formatted = if is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if ctx.color && has_events {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if is_weekend {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format a month as grid of lines (header, weekday row, week rows).
pub fn format_month_grid(
    ctx: &ScheduleContext,
    grid: &MonthGrid,
    events: &[CalendarEvent],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    let month_header = format_month_header(
        grid.year,
        grid.month,
        MONTH_WIDTH,
        ctx.show_year_in_header,
        ctx.color,
    );
    lines.push(month_header);
    lines.push(format_weekday_headers(ctx));

    for week in grid.cells.chunks(7) {
        let mut line = String::new();
        for day_in_week in 0..7 {
            let is_last = day_in_week == 6;
            match week.get(day_in_week).copied().flatten() {
                Some(date) => {
                    let has_events = !events_on_day(events, Some(date)).is_empty();
                    line.push_str(&format_day(ctx, date, has_events, is_last));
                }
                None => {
                    if is_last {
                        line.push_str("  ");
                    } else {
                        line.push_str("   ");
                    }
                }
            }
        }
        lines.push(line);
    }

    lines
}

/// Format the agenda of a single day: header, capped event lines, overflow.
///
/// Days without interviews produce no lines.
pub fn format_day_agenda(
    ctx: &ScheduleContext,
    day: NaiveDate,
    events: &[CalendarEvent],
) -> Vec<String> {
    let (visible, overflow) = visible_events_on_day(events, Some(day), ctx.max_per_day);
    let total = visible.len() + overflow;

    let mut lines = Vec::new();
    if total == 0 {
        return lines;
    }

    let noun = if total == 1 { "interview" } else { "interviews" };
    let header = format!(
        "{} {}  ({} {})",
        get_month_name(day.month()),
        day.day(),
        total,
        noun
    );
    if ctx.color {
        lines.push(format!("{}{}{}", COLOR_TEAL, header, COLOR_RESET));
    } else {
        lines.push(header);
    }

    for event in &visible {
        lines.push(format!(
            "  {}  {}",
            event.date.format("%H:%M"),
            event.summary_line()
        ));
    }
    if overflow > 0 {
        lines.push(format!("  +{} more", overflow));
    }

    lines
}

/// Format the agenda of every day of the month that has interviews.
pub fn format_agenda(
    ctx: &ScheduleContext,
    grid: &MonthGrid,
    events: &[CalendarEvent],
) -> Vec<String> {
    let mut lines = Vec::new();
    for date in grid.cells.iter().copied().flatten() {
        lines.extend(format_day_agenda(ctx, date, events));
    }
    lines
}

/// Format the next `limit` scheduled interviews at or after the context's now.
pub fn format_upcoming(
    ctx: &ScheduleContext,
    events: &[CalendarEvent],
    limit: usize,
) -> Vec<String> {
    let upcoming = upcoming_events(events, ctx.now, limit);
    let mut lines = Vec::with_capacity(upcoming.len() + 1);

    let header = "Upcoming interviews";
    if ctx.color {
        lines.push(format!("{}{}{}", COLOR_TEAL, header, COLOR_RESET));
    } else {
        lines.push(header.to_string());
    }

    if upcoming.is_empty() {
        lines.push("  (none scheduled)".to_string());
        return lines;
    }

    for event in upcoming {
        lines.push(format!(
            "  {}  {}",
            event.date.format("%Y-%m-%d %H:%M"),
            event.summary_line()
        ));
    }

    lines
}

/// Print a single month.
pub fn print_month(
    ctx: &ScheduleContext,
    year: i32,
    month: u32,
    events: &[CalendarEvent],
) -> Result<()> {
    let grid = MonthGrid::new(ctx, year, month)?;
    for line in format_month_grid(ctx, &grid, events) {
        println!("{}", line);
    }
    Ok(())
}

/// Print three months side by side (prev, current, next).
pub fn print_three_months(
    ctx: &ScheduleContext,
    year: i32,
    month: u32,
    events: &[CalendarEvent],
) -> Result<()> {
    let prev_month = if month == 1 { 12 } else { month - 1 };
    let prev_year = if month == 1 { year - 1 } else { year };
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    let months = vec![
        MonthGrid::new(ctx, prev_year, prev_month)?,
        MonthGrid::new(ctx, year, month)?,
        MonthGrid::new(ctx, next_year, next_month)?,
    ];
    print_months_side_by_side(ctx, &months, events);
    Ok(())
}

/// Print multiple months side by side.
pub fn print_months_side_by_side(
    ctx: &ScheduleContext,
    months: &[MonthGrid],
    events: &[CalendarEvent],
) {
    let grids: Vec<Vec<String>> = months
        .iter()
        .map(|m| format_month_grid(ctx, m, events))
        .collect();
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, grid) in grids.iter().enumerate() {
            if row < grid.len() {
                let text = &grid[row];
                let text_width = text.width();
                line.push_str(text);
                let padding = MONTH_WIDTH.saturating_sub(text_width);
                for _ in 0..padding {
                    line.push(' ');
                }
                if i < grids.len() - 1 {
                    for _ in 0..ctx.gutter_width {
                        line.push(' ');
                    }
                }
            } else {
                let width = if i < grids.len() - 1 {
                    MONTH_WIDTH + ctx.gutter_width
                } else {
                    MONTH_WIDTH
                };
                for _ in 0..width {
                    line.push(' ');
                }
            }
        }
        println!("{}", line);
    }
}

/// Print all 12 months of a year.
pub fn print_year(ctx: &ScheduleContext, year: i32, events: &[CalendarEvent]) -> Result<()> {
    println!("{}", center_text(&year.to_string(), 66));
    println!();

    let mut month_ctx = ctx.clone();
    month_ctx.show_year_in_header = false;
    month_ctx.gutter_width = GUTTER_WIDTH_YEAR;

    // Group months into rows of 3
    let mut month_rows = Vec::new();
    for month_row in 0..4u32 {
        let mut months = Vec::new();
        for col in 0..3u32 {
            let month = month_row * 3 + col + 1;
            months.push(MonthGrid::new(&month_ctx, year, month)?);
        }
        month_rows.push(months);
    }

    for months in month_rows.iter() {
        print_months_side_by_side(&month_ctx, months, events);
    }
    Ok(())
}

/// Print a specified number of months (-n mode).
pub fn print_months_count(
    ctx: &ScheduleContext,
    start_year: i32,
    start_month: u32,
    count: u32,
    events: &[CalendarEvent],
) -> Result<()> {
    let months_per_row = ctx.months_per_row();

    // Calculate start month for span mode (center around current month)
    let (actual_start_year, actual_start_month) = if ctx.span && count > 1 {
        let total_months = start_year * 12 + (start_month - 1) as i32;
        let half = (count as i32 - 1) / 2;
        let start = total_months - half;
        let year = start.div_euclid(12);
        let month = (start.rem_euclid(12) + 1) as u32;
        (year, month)
    } else {
        (start_year, start_month)
    };

    let mut months = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut month = actual_start_month + i;
        let mut year = actual_start_year;
        while month > 12 {
            month -= 12;
            year += 1;
        }
        months.push(MonthGrid::new(ctx, year, month)?);
    }

    for chunk in months.chunks(months_per_row as usize) {
        print_months_side_by_side(ctx, chunk, events);
    }

    Ok(())
}
