//! Configuration module for `CampusRecords`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::enrollment::DEFAULT_MAX_CREDITS_PER_SEMESTER;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application config directory
const DIR_VARIABLE: &str = "$CCRM";

/// Timestamp pattern for backup directory names when none is configured
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS_PER_SEMESTER
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `students.csv` and `courses.csv`
    #[serde(default)]
    pub data_dir: String,
    /// Directory CSV exports are written to
    #[serde(default)]
    pub export_dir: String,
    /// Directory timestamped backups are created in
    #[serde(default)]
    pub backup_dir: String,
}

/// Records engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Maximum credit hours a student may carry in one semester
    #[serde(default = "default_max_credits")]
    pub max_credits_per_semester: u32,
    /// chrono `strftime` pattern used to name backup directories
    #[serde(default)]
    pub timestamp_format: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_credits_per_semester: DEFAULT_MAX_CREDITS_PER_SEMESTER,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Records engine settings
    #[serde(default)]
    pub records: RecordsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override export directory
    pub export_dir: Option<String>,
    /// Override backup directory
    pub backup_dir: Option<String>,
    /// Override per-semester credit cap
    pub max_credits: Option<u32>,
}

impl Config {
    /// Get the `$CCRM` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/ccrm`
    /// - macOS: `~/Library/Application Support/ccrm`
    /// - Windows: `%APPDATA%\ccrm`
    #[must_use]
    pub fn get_ccrm_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ccrm")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in a newer release are populated.
    /// Only fields that are empty (or zero) here and set in `defaults` are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        for (field, default) in [
            (&mut self.paths.data_dir, &defaults.paths.data_dir),
            (&mut self.paths.export_dir, &defaults.paths.export_dir),
            (&mut self.paths.backup_dir, &defaults.paths.backup_dir),
            (
                &mut self.records.timestamp_format,
                &defaults.records.timestamp_format,
            ),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }

        if self.records.max_credits_per_semester == 0
            && defaults.records.max_credits_per_semester != 0
        {
            self.records.max_credits_per_semester = defaults.records.max_credits_per_semester;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is not touched.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     max_credits: Some(21),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(export_dir) = &overrides.export_dir {
            self.paths.export_dir.clone_from(export_dir);
        }
        if let Some(backup_dir) = &overrides.backup_dir {
            self.paths.backup_dir.clone_from(backup_dir);
        }

        if let Some(max_credits) = overrides.max_credits {
            self.records.max_credits_per_semester = max_credits;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// the directory returned by [`get_ccrm_dir`](Self::get_ccrm_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_ccrm_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CCRM` in a value to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let ccrm_dir = Self::get_ccrm_dir();
            value.replace(DIR_VARIABLE, ccrm_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$CCRM` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [paths]
    /// data_dir = "$CCRM/data"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.export_dir = Self::expand_variables(&config.paths.export_dir);
        config.paths.backup_dir = Self::expand_variables(&config.paths.backup_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary, so this is caught by the test suite.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults, save if changed
    /// - Otherwise (first run): create the config directory and save the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform-specific config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Directory holding the import CSV files
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.data_dir)
    }

    /// Directory exports are written to
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.export_dir)
    }

    /// Directory backups are created in
    #[must_use]
    pub fn backup_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.backup_dir)
    }

    /// Backup timestamp pattern, falling back to the default when unset
    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        if self.records.timestamp_format.is_empty() {
            DEFAULT_TIMESTAMP_FORMAT
        } else {
            &self.records.timestamp_format
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `export_dir`,
    /// `backup_dir`, `max_credits`, `timestamp_format` (dashes are accepted in
    /// place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "export_dir" | "export-dir" => Some(self.paths.export_dir.clone()),
            "backup_dir" | "backup-dir" => Some(self.paths.backup_dir.clone()),
            "max_credits" | "max-credits" => {
                Some(self.records.max_credits_per_semester.to_string())
            }
            "timestamp_format" | "timestamp-format" => Some(self.records.timestamp_format.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// (e.g., "maybe" for `verbose`, "0" or "lots" for `max_credits`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "export_dir" | "export-dir" => self.paths.export_dir = value.to_string(),
            "backup_dir" | "backup-dir" => self.paths.backup_dir = value.to_string(),
            "max_credits" | "max-credits" => {
                self.records.max_credits_per_semester = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("Invalid credit cap for 'max_credits': '{value}'"))?;
            }
            "timestamp_format" | "timestamp-format" => {
                self.records.timestamp_format = value.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "export_dir" | "export-dir" => {
                self.paths.export_dir.clone_from(&defaults.paths.export_dir);
            }
            "backup_dir" | "backup-dir" => {
                self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            }
            "max_credits" | "max-credits" => {
                self.records.max_credits_per_semester = defaults.records.max_credits_per_semester;
            }
            "timestamp_format" | "timestamp-format" => self
                .records
                .timestamp_format
                .clone_from(&defaults.records.timestamp_format),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if the file is already gone.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  export_dir = \"{}\"", self.paths.export_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;

        writeln!(f, "\n[records]")?;
        writeln!(
            f,
            "  max_credits_per_semester = {}",
            self.records.max_credits_per_semester
        )?;
        writeln!(
            f,
            "  timestamp_format = \"{}\"",
            self.records.timestamp_format
        )?;

        Ok(())
    }
}
