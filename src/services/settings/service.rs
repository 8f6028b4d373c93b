use crate::models::settings::Settings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "BLACKOUT_DATE_PICKER_CONFIG";

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the config file from the environment override or the
    /// platform config directory.
    pub fn from_environment() -> Option<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            log::info!("Using config file from {}", CONFIG_ENV_VAR);
            return Some(Self::new(PathBuf::from(path)));
        }

        ProjectDirs::from("com", "BlackoutDatePicker", "DatePicker")
            .map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        let settings: Settings =
            toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        settings.validate().map_err(SettingsError::Invalid)?;

        log::info!(
            "Loaded settings from {} ({} blackout dates)",
            self.path.display(),
            settings.blackout_dates.len()
        );
        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, contents).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Write default settings unless a file already exists
    pub fn ensure_exists(&self) -> Result<(), SettingsError> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&Settings::default())
    }

    /// Seed a default file on first run, then load it.
    ///
    /// A file that cannot be written is only logged, so a read-only config
    /// directory still starts with defaults.
    pub fn load_or_seed(&self) -> Result<Settings, SettingsError> {
        if let Err(err) = self.ensure_exists() {
            log::warn!("Could not write default settings: {}", err);
        }
        self.load()
    }
}
