use super::state::HostState;
use super::HostApp;
use crate::models::settings::Settings;
use crate::ui_egui::date_picker::{DatePicker, DatePickerState};
use crate::ui_egui::theme::PickerTheme;
use chrono::{Local, NaiveDate};

impl HostApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        let app = Self::from_settings(settings, today);
        app.theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the host state without a window
    pub fn from_settings(settings: Settings, today: NaiveDate) -> Self {
        let selected_date = settings.initial_selected_date(today);
        let blackout = settings.blackout_set();
        if blackout.len() != settings.blackout_dates.len() {
            log::warn!(
                "Using {} of {} configured blackout dates",
                blackout.len(),
                settings.blackout_dates.len()
            );
        }
        log::info!(
            "Starting with selected date '{}' and {} blackout dates",
            selected_date,
            blackout.len()
        );

        Self {
            picker: DatePickerState::new(&selected_date, today),
            host: HostState::new(selected_date),
            blackout,
            theme: PickerTheme::for_preference(settings.theme),
            settings,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Select a date");
            ui.add_space(8.0);

            let selected_date = self.host.selected_date().to_owned();
            self.picker = DatePicker::new("date_picker", &selected_date, &self.blackout, &self.theme)
                .blackout_policy(self.settings.blackout_policy)
                .year_span(self.settings.year_span)
                .show(ui, self.picker, &mut self.host);
        });
    }
}
