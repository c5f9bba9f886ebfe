use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::charset::ASSUMED_ALPHABET_SIZE;
use crate::error::SettingsError;
use crate::password::{MAX_LENGTH, MIN_LENGTH};
use crate::widget::DEFAULT_LENGTH;

/// Application settings. Read once at startup, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Initial value of the length input (4-100, default 12)
    pub default_length: usize,
    /// Alphabet size the crack-time estimate assumes (1-1000, default 94)
    pub assumed_alphabet_size: usize,
    /// tracing filter directive, overridden by `PASSGEN_LOG`
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            assumed_alphabet_size: ASSUMED_ALPHABET_SIZE,
            log_filter: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Returns the path to the settings file, if a config dir can be resolved
    pub fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "PassGen", "PassGen")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default location. A missing file yields the
    /// defaults; an unreadable one is an error the caller may fall back from.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit file. Out-of-range values are clamped.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&data)?;
        settings.set_default_length(settings.default_length);
        settings.set_assumed_alphabet_size(settings.assumed_alphabet_size);
        Ok(settings)
    }

    /// Validate and clamp the default length to allowed range
    pub fn set_default_length(&mut self, length: usize) {
        self.default_length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// Validate and clamp the assumed alphabet size to allowed range
    pub fn set_assumed_alphabet_size(&mut self, size: usize) {
        self.assumed_alphabet_size = size.clamp(1, 1000);
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{json}").expect("Failed to write");
        file
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_length, 12);
        assert_eq!(settings.assumed_alphabet_size, 94);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_default_length_clamping() {
        let mut settings = AppSettings::default();

        // Below minimum
        settings.set_default_length(1);
        assert_eq!(settings.default_length, 4);

        // Above maximum
        settings.set_default_length(250);
        assert_eq!(settings.default_length, 100);

        // Within range
        settings.set_default_length(16);
        assert_eq!(settings.default_length, 16);
    }

    #[test]
    fn test_alphabet_size_clamping() {
        let mut settings = AppSettings::default();
        settings.set_assumed_alphabet_size(0);
        assert_eq!(settings.assumed_alphabet_size, 1);
        settings.set_assumed_alphabet_size(72);
        assert_eq!(settings.assumed_alphabet_size, 72);
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let file = settings_file(r#"{ "default_length": 20 }"#);
        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.default_length, 20);
        assert_eq!(settings.assumed_alphabet_size, 94);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_load_from_clamps_values() {
        let file = settings_file(r#"{ "default_length": 2, "assumed_alphabet_size": 5000 }"#);
        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.default_length, 4);
        assert_eq!(settings.assumed_alphabet_size, 1000);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let file = settings_file("default_length = 20");
        assert!(matches!(
            AppSettings::load_from(file.path()),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppSettings::load_from(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
