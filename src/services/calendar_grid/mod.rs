//! Month grid construction.
//!
//! Every month is laid out as six Sunday-first weeks. Leading cells are the
//! previous month's last days and trailing cells the next month's first days,
//! so the grid height never changes while navigating.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{CalendarViewState, DateCell, MonthGrid, GRID_CELLS};

/// Number of days in the viewed month.
///
/// Computed as the day before the first of the following month. December is
/// always 31 days, since the following January may lie past the last
/// representable date.
pub fn days_in_month(view: CalendarViewState) -> u32 {
    if view.month() == 11 {
        return 31;
    }
    view.shifted(1)
        .first_day()
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Build the 42-cell grid for a view.
pub fn build_grid(view: CalendarViewState) -> MonthGrid {
    let first_weekday = view
        .first_day()
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let days = days_in_month(view);
    let days_in_prev_month = days_in_month(view.shifted(-1));

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for back in (0..first_weekday).rev() {
        cells.push(DateCell::leading(days_in_prev_month - back));
    }

    for day in 1..=days {
        cells.push(DateCell::current(day));
    }

    let trailing = (GRID_CELLS - cells.len()) as u32;
    for day in 1..=trailing {
        cells.push(DateCell::trailing(day));
    }

    MonthGrid::new(view, cells)
}

/// Build the grid for a year and 0-based month, if the pair is valid.
pub fn build_grid_for(year: i32, month: u32) -> Option<MonthGrid> {
    CalendarViewState::new(year, month).map(build_grid)
}

/// Build the grid for the month containing `date`.
pub fn build_grid_for_date(date: NaiveDate) -> MonthGrid {
    build_grid(CalendarViewState::from_date(date))
}
