use crate::core::Tracker;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Settings of the `rattendance` binary.
///
/// The library itself never reads this file: callers hand the school name
/// and table paths straight to [`Tracker::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub school_name: String,
    pub student_file: String,
    pub attendance_file: String,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            school_name: "School".to_string(),
            student_file: dir.join("students.csv").to_string_lossy().to_string(),
            attendance_file: dir.join("attendance.csv").to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn student_path(&self) -> PathBuf {
        expand_tilde(&self.student_file)
    }

    pub fn attendance_path(&self) -> PathBuf {
        expand_tilde(&self.attendance_file)
    }

    /// Tracker bound to the configured school and tables.
    pub fn open_tracker(&self) -> AppResult<Tracker> {
        Tracker::new(
            self.school_name.as_str(),
            self.student_path(),
            self.attendance_path(),
        )
    }
}
