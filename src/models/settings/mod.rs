// Settings module
// User configuration loaded from config.toml

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::blackout::BlackoutDates;
use crate::utils::date::{format_date, is_valid_date_text};

/// Widest year dropdown accepted
pub const MAX_YEAR_SPAN: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the desktop's light/dark mode
    #[default]
    System,
}

/// How blackout dates behave in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlackoutPolicy {
    /// Marked but still selectable
    #[default]
    Highlight,
    /// Marked and disabled
    Block,
}

impl BlackoutPolicy {
    /// Whether a cell can be picked under this policy
    pub fn allows_pick(self, is_blackout: bool) -> bool {
        !(is_blackout && self == BlackoutPolicy::Block)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub blackout_dates: Vec<String>,
    /// Text placed in the input on start; today when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    pub theme: ThemePreference,
    /// Number of years listed in the year dropdown
    pub year_span: u32,
    pub blackout_policy: BlackoutPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blackout_dates: vec!["03/16/2023".to_string(), "03/30/2023".to_string()],
            initial_date: None,
            theme: ThemePreference::System,
            year_span: 50,
            blackout_policy: BlackoutPolicy::Highlight,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.year_span == 0 || self.year_span > MAX_YEAR_SPAN {
            return Err(format!(
                "year_span must be between 1 and {}, got {}",
                MAX_YEAR_SPAN, self.year_span
            ));
        }

        if let Some(initial) = &self.initial_date {
            if !is_valid_date_text(initial) {
                return Err(format!(
                    "initial_date '{}' must use the MM/DD/YYYY format",
                    initial
                ));
            }
        }

        Ok(())
    }

    pub fn blackout_set(&self) -> BlackoutDates {
        BlackoutDates::from_strings(&self.blackout_dates)
    }

    /// Text the host starts with
    pub fn initial_selected_date(&self, today: NaiveDate) -> String {
        self.initial_date
            .clone()
            .unwrap_or_else(|| format_date(today))
    }
}
