// Calendar module
// Month view state and the fixed 6x7 grid of day cells

use chrono::{Datelike, Month, NaiveDate};

/// Number of cells in a month grid (six weeks of seven days)
pub const GRID_CELLS: usize = 42;

/// Days per grid row
pub const GRID_COLUMNS: usize = 7;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently displayed by the popup calendar.
///
/// `month` is 0-based (0 = January). The view is independent of the selected
/// date until a pick or dropdown change moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarViewState {
    year: i32,
    month: u32,
}

impl CalendarViewState {
    /// Create a view for a 0-based month.
    ///
    /// Returns `None` if the month is out of range or the year cannot be
    /// represented as a calendar date.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        let view = Self { year, month };
        view.first_day().map(|_| view)
    }

    /// The view containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// Shift the view by a number of months, rolling the year over as needed.
    pub fn shifted(self, months: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(months);
        let year = total
            .div_euclid(12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let month = total.rem_euclid(12) as u32;
        Self { year, month }
    }

    pub fn month_name(self) -> &'static str {
        month_name(self.month)
    }
}

/// English name of a 0-based month, empty for out-of-range values.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|number| Month::try_from(number.saturating_add(1)).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateCell {
    /// Day of month shown in the cell (1-31)
    pub day: u32,
    pub in_current_month: bool,
    /// -1 for the previous month's trailing days, +1 for the next month's
    /// leading days, 0 otherwise
    pub month_offset: i32,
}

impl DateCell {
    pub fn leading(day: u32) -> Self {
        Self {
            day,
            in_current_month: false,
            month_offset: -1,
        }
    }

    pub fn current(day: u32) -> Self {
        Self {
            day,
            in_current_month: true,
            month_offset: 0,
        }
    }

    pub fn trailing(day: u32) -> Self {
        Self {
            day,
            in_current_month: false,
            month_offset: 1,
        }
    }

    /// Concrete date of this cell when displayed in `view`.
    ///
    /// Cells from adjacent months resolve into those months, so the trailing
    /// "3" of a January grid is February 3rd.
    pub fn resolve(&self, view: CalendarViewState) -> Option<NaiveDate> {
        let month = view.shifted(self.month_offset);
        NaiveDate::from_ymd_opt(month.year, month.month + 1, self.day)
    }
}

/// The 42 cells displayed for a month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    view: CalendarViewState,
    cells: Vec<DateCell>,
}

impl MonthGrid {
    pub(crate) fn new(view: CalendarViewState, cells: Vec<DateCell>) -> Self {
        debug_assert_eq!(cells.len(), GRID_CELLS);
        Self { view, cells }
    }

    pub fn view(&self) -> CalendarViewState {
        self.view
    }

    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    /// Grid rows of seven cells each
    pub fn rows(&self) -> impl Iterator<Item = &[DateCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_month_count(&self) -> usize {
        self.cells.iter().filter(|c| c.in_current_month).count()
    }

    /// Cells paired with the date each resolves to
    pub fn dates(&self) -> impl Iterator<Item = (DateCell, Option<NaiveDate>)> + '_ {
        self.cells.iter().map(move |cell| (*cell, cell.resolve(self.view)))
    }
}
