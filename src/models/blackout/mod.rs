// Blackout module
// Set of dates rendered as unavailable in the calendar grid

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use crate::models::date_input::DateInput;
use crate::utils::date::{format_date_parts, parse_date_text};

/// Dates marked unavailable, stored in canonical `MM/DD/YYYY` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlackoutDates {
    dates: HashSet<String>,
}

impl BlackoutDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `MM/DD/YYYY` strings, skipping malformed entries.
    pub fn from_strings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blackout = Self::new();
        for entry in entries {
            blackout.insert(entry.as_ref());
        }
        blackout
    }

    /// Add an entry. Single-digit month or day is zero padded.
    ///
    /// Returns `false` if the entry does not match the date pattern.
    pub fn insert(&mut self, entry: &str) -> bool {
        match parse_date_text(entry) {
            DateInput::Valid(fields) => {
                self.dates.insert(fields.to_string());
                true
            }
            DateInput::Pending(raw) => {
                log::warn!("Ignoring malformed blackout date '{}'", raw);
                false
            }
        }
    }

    /// Check a day, 0-based month and year against the set.
    pub fn is_blackout(&self, day: u32, month: u32, year: i32) -> bool {
        self.dates
            .contains(&format_date_parts(month.saturating_add(1), day, year))
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.is_blackout(date.day(), date.month0(), date.year())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(String::as_str)
    }
}
