mod lifecycle;
mod state;

pub use self::state::HostState;

use crate::models::blackout::BlackoutDates;
use crate::models::settings::Settings;
use crate::ui_egui::date_picker::{DatePickerState, PickerEvent};
use crate::ui_egui::theme::PickerTheme;

/// Window hosting a single date picker.
///
/// Owns the authoritative selected-date text and the blackout set; the
/// picker reports edits back through [`HostState`].
pub struct HostApp {
    /// Committed selected date (may be mid-edit and invalid)
    host: HostState,
    blackout: BlackoutDates,
    /// Popup visibility and displayed month
    picker: DatePickerState,
    /// Currently applied theme colors
    theme: PickerTheme,
    settings: Settings,
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl HostApp {
    pub fn selected_date(&self) -> &str {
        self.host.selected_date()
    }

    pub fn blackout(&self) -> &BlackoutDates {
        &self.blackout
    }

    pub fn picker_state(&self) -> DatePickerState {
        self.picker
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a picker interaction outside of a frame
    pub fn handle_picker_event(&mut self, event: PickerEvent) {
        self.picker = self.picker.dispatch(event, &mut self.host);
    }
}
