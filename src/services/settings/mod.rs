// Settings service
// Reads and writes the picker's config.toml

mod service;

pub use service::{SettingsError, SettingsService, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
