// Blackout Date Picker
// Main entry point

use anyhow::{anyhow, Context, Result};
use blackout_date_picker::models::settings::Settings;
use blackout_date_picker::services::settings::SettingsService;
use blackout_date_picker::ui_egui::HostApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Blackout Date Picker");

    let settings = match SettingsService::from_environment() {
        Some(service) => service
            .load_or_seed()
            .with_context(|| format!("Failed to load settings from {}", service.path().display()))?,
        None => {
            log::warn!("No config directory available, using default settings");
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Date Picker")
            .with_inner_size([340.0, 420.0])
            .with_min_inner_size([280.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blackout Date Picker",
        options,
        Box::new(move |cc| Ok(Box::new(HostApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("Failed to run date picker window: {}", err))
}
