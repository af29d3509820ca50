use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::modules::storage::io_err;
use crate::modules::navigation::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the persisted booking.
    pub data_dir: PathBuf,
    /// Maximum back-history entries kept by the navigator.
    pub history_limit: usize,
    /// Page the navigator starts on.
    pub start_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            history_limit: DEFAULT_HISTORY_LIMIT,
            start_path: "/".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                    Self::default()
                }),
                Err(e) => {
                    warn!("[Settings] Failed to read file: {}, returning defaults", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let tmp_path = path.with_extension("tmp");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to tmp, then rename, so the file is never half-written.
        fs::write(&tmp_path, json).map_err(io_err(&tmp_path))?;
        fs::rename(&tmp_path, path).map_err(io_err(path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::load(&dir.path().join("settings.json")), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf").join("settings.json");
        let settings = Settings {
            data_dir: dir.path().join("store"),
            history_limit: 5,
            start_path: "/checkout".to_string(),
        };

        settings.save(&path).unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"history_limit": 3}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.history_limit, 3);
        assert_eq!(settings.start_path, "/");
    }

    #[cfg(unix)]
    #[test]
    fn test_unserializable_settings_report_settings_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: PathBuf::from(OsString::from_vec(vec![0xff, 0xfe])),
            ..Settings::default()
        };

        let err = settings.save(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Serialize(_)));
        assert!(err.to_string().starts_with("failed to serialize settings"));
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{{{").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
