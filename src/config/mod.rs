use crate::core::layout::CrossMidnight;
use crate::errors::{AppError, AppResult};
use crate::models::time_window::TimeWindow;
use crate::ui::messages::success;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_events_file")]
    pub events_file: String,
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_min_slot")]
    pub min_slot_height: f64,
    #[serde(default = "default_max_slot")]
    pub max_slot_height: f64,
    #[serde(default = "default_container_height")]
    pub default_container_height: f64,
    #[serde(default = "default_week_width")]
    pub week_width: f64,
    #[serde(default = "default_snap_minutes")]
    pub snap_minutes: u32,
    #[serde(default = "default_click_snap_minutes")]
    pub click_snap_minutes: u32,
    #[serde(default)]
    pub cross_midnight: CrossMidnight,
    #[serde(default = "default_rows_per_hour")]
    pub grid_rows_per_hour: usize,
    #[serde(default = "default_column_width")]
    pub grid_column_width: usize,
}

fn default_events_file() -> String {
    Config::config_dir()
        .join("events.json")
        .to_string_lossy()
        .to_string()
}
fn default_start_hour() -> u32 {
    6
}
fn default_end_hour() -> u32 {
    23
}
fn default_header_height() -> f64 {
    50.0
}
fn default_padding() -> f64 {
    32.0
}
fn default_min_slot() -> f64 {
    25.0
}
fn default_max_slot() -> f64 {
    80.0
}
fn default_container_height() -> f64 {
    800.0
}
fn default_week_width() -> f64 {
    700.0
}
fn default_snap_minutes() -> u32 {
    5
}
fn default_click_snap_minutes() -> u32 {
    15
}
fn default_rows_per_hour() -> usize {
    2
}
fn default_column_width() -> usize {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: default_events_file(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            header_height: default_header_height(),
            padding: default_padding(),
            min_slot_height: default_min_slot(),
            max_slot_height: default_max_slot(),
            default_container_height: default_container_height(),
            week_width: default_week_width(),
            snap_minutes: default_snap_minutes(),
            click_snap_minutes: default_click_snap_minutes(),
            cross_midnight: CrossMidnight::default(),
            grid_rows_per_hour: default_rows_per_hour(),
            grid_column_width: default_column_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dayaxis")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dayaxis")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dayaxis.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;

        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    /// Reject values the layout math cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        self.time_window()?;

        if self.min_slot_height <= 0.0 || self.max_slot_height < self.min_slot_height {
            return Err(AppError::Config(format!(
                "slot height bounds must satisfy 0 < min <= max (got {} / {})",
                self.min_slot_height, self.max_slot_height
            )));
        }
        if self.week_width < 0.0 || self.default_container_height < 0.0 {
            return Err(AppError::Config(
                "week_width and default_container_height must be >= 0".into(),
            ));
        }
        for (name, v) in [
            ("snap_minutes", self.snap_minutes),
            ("click_snap_minutes", self.click_snap_minutes),
        ] {
            if v == 0 || v > 60 {
                return Err(AppError::Config(format!(
                    "{name} must be within 1-60 (got {v})"
                )));
            }
        }
        if self.grid_rows_per_hour == 0 || self.grid_column_width < 4 {
            return Err(AppError::Config(
                "grid_rows_per_hour must be >= 1 and grid_column_width >= 4".into(),
            ));
        }
        Ok(())
    }

    pub fn time_window(&self) -> AppResult<TimeWindow> {
        TimeWindow::new(self.start_hour, self.end_hour)
    }

    /// Events file, relative paths taken from the config directory.
    pub fn events_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.events_file)
    }

    /// Initialize the configuration directory, config file and an empty
    /// events file.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let conf_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = conf_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(&conf_path, yaml)?;
            success(format!("Config file: {}", conf_path.display()));
        }

        let events = config.events_path();
        if !events.exists() {
            if let Some(dir) = events.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&events, "[]\n")?;
        }
        success(format!("Events file: {}", events.display()));

        Ok(conf_path)
    }
}
