// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use blackout_date_picker::models::calendar::CalendarViewState;
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Fixed "today" so tests do not depend on the clock
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    /// Returns Mar 16, 2023 (a configured blackout date)
    pub fn blackout_march_16() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 16).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample month views
pub mod views {
    use super::*;

    pub fn january_2023() -> CalendarViewState {
        CalendarViewState::new(2023, 0).unwrap()
    }

    pub fn march_2023() -> CalendarViewState {
        CalendarViewState::new(2023, 2).unwrap()
    }

    pub fn december_2023() -> CalendarViewState {
        CalendarViewState::new(2023, 11).unwrap()
    }
}

/// Blackout lists as they appear in config files
pub mod blackout {
    pub fn sample_entries() -> Vec<String> {
        vec!["03/16/2023".to_string(), "03/30/2023".to_string()]
    }
}
