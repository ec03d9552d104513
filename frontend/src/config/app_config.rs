//! Application Configuration
//!
//! Window, safe-area and logging settings for the room-creation app.

use crate::pages::SafeAreaInsets;
use logging::LogLevel;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "create_room.conf";
const CONFIG_DIR_NAME: &str = "create-room";

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Echo log lines to stdout
    pub console_log: bool,
    /// Name pre-filled in the "Your Name" row
    pub user_name: String,
    /// Initial window size in points
    pub window_width: f32,
    pub window_height: f32,
    /// Space reserved at the top and bottom of the window
    pub safe_area: SafeAreaInsets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("create_room.log"),
            log_level: LogLevel::Info,
            console_log: false,
            user_name: String::new(),
            window_width: 420.0,
            window_height: 780.0,
            safe_area: SafeAreaInsets::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// # comment
    /// log_path=create_room.log
    /// log_level=Debug
    /// user_name=alice
    /// window_width=420
    /// safe_area_bottom=34
    /// ```
    ///
    /// Keys that are missing keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parses `key=value` lines on top of the defaults
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut config = Self::default();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(format!("Line {}: expected key=value, got '{}'", number + 1, line));
            };
            let value = value.trim();

            match key.trim() {
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => {
                    config.log_level = value.parse().unwrap_or_else(|e| {
                        eprintln!("Warning: {}, using Info", e);
                        LogLevel::Info
                    })
                }
                "console_log" => config.console_log = parse_bool(value, number)?,
                "user_name" => config.user_name = value.to_string(),
                "window_width" => config.window_width = parse_points(value, number)?,
                "window_height" => config.window_height = parse_points(value, number)?,
                "safe_area_top" => config.safe_area.top = parse_points(value, number)?,
                "safe_area_bottom" => config.safe_area.bottom = parse_points(value, number)?,
                other => {
                    // Ignore unknown keys for forward compatibility
                    eprintln!("Warning: Unknown configuration key '{}' ignored", other);
                }
            }
        }

        Ok(config)
    }

    /// Loads the first configuration file found, falling back to defaults.
    /// Tries ./create_room.conf, ./frontend/create_room.conf, ../create_room.conf,
    /// then the user's config directory.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(e) if path.exists() => eprintln!("{}", e),
                Err(_) => continue,
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("frontend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        paths
    }
}

fn parse_points(value: &str, line: usize) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(points) if points.is_finite() && points >= 0.0 => Ok(points),
        _ => Err(format!(
            "Line {}: '{}' is not a non-negative number",
            line + 1,
            value
        )),
    }
}

fn parse_bool(value: &str, line: usize) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(format!("Line {}: '{}' is not a boolean", line + 1, value)),
    }
}
