// Date input module
// Typed interpretation of the text in the picker's input field

use chrono::NaiveDate;
use std::fmt;

use super::calendar::CalendarViewState;

/// Numeric fields of text that matched the `MM/DD/YYYY` pattern.
///
/// `month` is 1-based. The fields are only range checked individually, so
/// they may describe a day that does not exist (e.g. February 30th).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateFields {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl DateFields {
    /// The calendar date these fields name, if it exists
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// The month view containing these fields
    pub fn view(self) -> Option<CalendarViewState> {
        CalendarViewState::new(self.year, self.month.checked_sub(1)?)
    }
}

impl fmt::Display for DateFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

/// What the user has typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Text matched the date pattern
    Valid(DateFields),
    /// Text is still being edited, or is malformed
    Pending(String),
}

impl DateInput {
    pub fn is_valid(&self) -> bool {
        matches!(self, DateInput::Valid(_))
    }

    /// Concrete date, when the text matched and names a real day
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Valid(fields) => fields.to_date(),
            DateInput::Pending(_) => None,
        }
    }
}
