use chrono::NaiveDate;

use crate::ui_egui::date_picker::DatePickerHandler;
use crate::utils::date::format_date;

/// The host's side of the picker contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostState {
    selected_date: String,
}

impl HostState {
    pub fn new(selected_date: impl Into<String>) -> Self {
        Self {
            selected_date: selected_date.into(),
        }
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }
}

impl DatePickerHandler for HostState {
    fn on_date_change(&mut self, text: String) {
        log::debug!("Selected date text changed to '{}'", text);
        self.selected_date = text;
    }

    fn on_date_pick(&mut self, date: NaiveDate) {
        self.selected_date = format_date(date);
        log::info!("Picked {}", self.selected_date);
    }
}
