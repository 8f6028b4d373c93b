// Property-based tests for grid construction and date formatting

use blackout_date_picker::models::calendar::{CalendarViewState, GRID_CELLS};
use blackout_date_picker::services::calendar_grid::build_grid;
use blackout_date_picker::ui_egui::date_picker::{DatePickerState, PickerEvent, PickerOutput};
use blackout_date_picker::utils::date::{format_date, is_valid_date_text};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn real_month_length(year: i32, month0: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1).unwrap()
    };
    (next - first).num_days() as u32
}

proptest! {
    /// Property: every month grid has exactly 42 cells in six rows
    #[test]
    fn prop_grid_always_42_cells(year in 1..=9999i32, month in 0..12u32) {
        let grid = build_grid(CalendarViewState::new(year, month).unwrap());
        prop_assert_eq!(grid.len(), GRID_CELLS);
        prop_assert_eq!(grid.rows().count(), 6);
    }

    /// Property: in-month cells match the real month length
    #[test]
    fn prop_in_month_count_matches_calendar(year in 1..=9999i32, month in 0..12u32) {
        let grid = build_grid(CalendarViewState::new(year, month).unwrap());
        prop_assert_eq!(grid.in_month_count() as u32, real_month_length(year, month));
    }

    /// Property: grid starts on a Sunday and covers 42 consecutive days
    #[test]
    fn prop_grid_dates_consecutive_from_sunday(year in 1..=9999i32, month in 0..12u32) {
        let grid = build_grid(CalendarViewState::new(year, month).unwrap());
        let dates: Vec<NaiveDate> = grid.dates().map(|(_, d)| d.unwrap()).collect();
        prop_assert_eq!(dates[0].weekday().num_days_from_sunday(), 0);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    /// Property: in-month cells resolve into the viewed month, others do not
    #[test]
    fn prop_cells_resolve_into_expected_month(year in 1..=9999i32, month in 0..12u32) {
        let view = CalendarViewState::new(year, month).unwrap();
        for (cell, date) in build_grid(view).dates() {
            let date = date.unwrap();
            prop_assert_eq!(date.day(), cell.day);
            prop_assert_eq!(cell.in_current_month, date.month0() == month && date.year() == year);
        }
    }

    /// Property: formatted dates always match MM/DD/YYYY and the validator
    #[test]
    fn prop_format_date_shape(days in 0i64..3_652_000) {
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
        prop_assume!(date.year() <= 9999);
        let text = format_date(date);
        let bytes = text.as_bytes();
        prop_assert_eq!(bytes.len(), 10);
        prop_assert_eq!(bytes[2], b'/');
        prop_assert_eq!(bytes[5], b'/');
        prop_assert!(text
            .bytes()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit()));
        prop_assert!(is_valid_date_text(&text));
    }

    /// Property: picking any cell yields the date it displays and closes the popup
    ///
    /// Year 9999 is left out since its December trails into year 10000.
    #[test]
    fn prop_pick_resolves_displayed_cell(year in 1..9999i32, month in 0..12u32, index in 0..GRID_CELLS) {
        let view = CalendarViewState::new(year, month).unwrap();
        let text = format!("{}/1/{:04}", month + 1, year);
        let state = DatePickerState::new(&text, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
            .reduce(PickerEvent::InputFocused)
            .state;
        prop_assert_eq!(state.view, view);

        let (cell, expected) = build_grid(view).dates().nth(index).unwrap();
        let transition = state.reduce(PickerEvent::CellClicked(cell));
        prop_assert_eq!(transition.output, expected.map(PickerOutput::DatePicked));
        prop_assert!(!transition.state.is_open());
    }
}
