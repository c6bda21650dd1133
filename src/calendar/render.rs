use crate::model::{CalendarGrid, DAYS_IN_LAST_SIX_MONTHS, WEEKS_IN_LAST_SIX_MONTHS};
use crate::util::month_abbrev;
use chrono::{Duration, NaiveDate};
use console::Style;
use std::fmt::Write;

const LABEL_WIDTH: usize = 9;
const EMPTY_CELL: &str = "  - ";

/// Cell styles, one per intensity band plus the highlight for today.
#[derive(Debug, Clone)]
pub struct Palette {
    pub empty: Style,
    pub low: Style,
    pub mid: Style,
    pub high: Style,
    pub today: Style,
}

impl Palette {
    /// Styles that still emit escape codes when stdout is not a terminal.
    pub fn forced() -> Self {
        Self::build(true)
    }

    fn build(force: bool) -> Self {
        let base = if force {
            Style::new().force_styling(true)
        } else {
            Style::new()
        };
        Self {
            empty: base.clone().black(),
            low: base.clone().black().on_yellow().bold(),
            mid: base.clone().black().on_cyan().bold(),
            high: base.clone().black().on_green().bold(),
            today: base.white().on_magenta().bold(),
        }
    }

    pub fn band(&self, count: u32) -> &Style {
        match count {
            0 => &self.empty,
            1..=2 => &self.low,
            3..=5 => &self.mid,
            _ => &self.high,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build(false)
    }
}

/// Four-column cell text: a dash for zero, otherwise the right-aligned count.
pub fn cell_text(count: u32) -> String {
    if count == 0 {
        EMPTY_CELL.to_string()
    } else {
        format!("{count:>3} ")
    }
}

pub fn format_cell(count: u32, today: bool, palette: &Palette) -> String {
    let style = if today { &palette.today } else { palette.band(count) };
    style.apply_to(cell_text(count)).to_string()
}

pub fn weekday_label(row: usize) -> String {
    let name = match row {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "",
    };
    format!("{:>width$}", format!("{name} "), width = LABEL_WIDTH)
}

/// Header row naming each month where a new one begins.
pub fn render_months(today: NaiveDate) -> String {
    let mut out = " ".repeat(LABEL_WIDTH);
    let mut week = today - Duration::days(DAYS_IN_LAST_SIX_MONTHS as i64);
    let mut month = month_abbrev(week);

    loop {
        let current = month_abbrev(week);
        if current != month {
            let _ = write!(out, "{current} ");
            month = current;
        } else {
            out.push_str("    ");
        }
        week += Duration::days(7);
        if week > today {
            break;
        }
    }

    out.push('\n');
    out
}

/// `(week, row)` of the cell holding today's bucket.
///
/// Commits made today land in bucket `offset`, so the highlight follows that
/// bucket through the grid fold.
pub fn today_cell(offset: u32) -> (usize, usize) {
    let day = offset as usize;
    (day / 7, day % 7)
}

/// Grid body: Saturday on top, oldest probe week on the left.
pub fn render_cells(grid: &CalendarGrid, offset: u32, palette: &Palette) -> String {
    let mut out = String::new();
    let today = today_cell(offset);

    for row in (0..7).rev() {
        out.push_str(&weekday_label(row));
        for week in (0..=WEEKS_IN_LAST_SIX_MONTHS + 1).rev() {
            let cell = match grid.week(week) {
                Some(column) if (week, row) == today => {
                    format_cell(column.get(row).unwrap_or(0), true, palette)
                }
                Some(column) => format_cell(column.get(row).unwrap_or(0), false, palette),
                None => format_cell(0, false, palette),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out
}

pub fn render_calendar(
    grid: &CalendarGrid,
    offset: u32,
    today: NaiveDate,
    palette: &Palette,
) -> String {
    let mut out = render_months(today);
    out.push_str(&render_cells(grid, offset, palette));
    out
}
