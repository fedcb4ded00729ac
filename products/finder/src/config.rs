use finder_base::{LogConfig, log::LevelFilter};
use finder_camera::{CameraConfig, Rotation};
use finder_vision::ANALYSIS_INTERVAL_MS;
use serde::Deserialize;
use std::{
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Synthetic moving gradient.
    Pattern,
    /// V4L2 capture device, needs the `v4l2` feature.
    V4l2 { device: String },
}

/// Application settings, read from a JSON file. Missing fields take defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Rotation reported by the sensor, in degrees.
    pub sensor_rotation: i32,
    /// Display rotation as a quarter-turn code, 0 to 3.
    pub display_rotation: i32,
    pub media_dir: PathBuf,
    /// Log to daily files here instead of stdout.
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub analysis_interval_ms: u64,
    pub label_replay: Option<PathBuf>,
    pub object_replay: Option<PathBuf>,
    pub jpeg_quality: u8,
    pub ui_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::Pattern,
            width: 640,
            height: 480,
            fps: 30,
            sensor_rotation: 0,
            display_rotation: 0,
            media_dir: PathBuf::from("media"),
            log_dir: None,
            log_level: None,
            analysis_interval_ms: ANALYSIS_INTERVAL_MS,
            label_replay: None,
            object_replay: None,
            jpeg_quality: 90,
            ui_channel_capacity: 64,
        }
    }
}

impl AppConfig {
    /// Read the config at `path`, or use the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_json(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.width == 0 || config.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "frame size {}x{} is empty",
                config.width, config.height
            )));
        }
        Ok(config)
    }

    pub fn camera_config(&self) -> CameraConfig {
        let config = CameraConfig::default()
            .with_width(self.width)
            .with_height(self.height)
            .with_fps(self.fps)
            .with_rotation_degrees(self.sensor_rotation);
        match &self.source {
            SourceConfig::V4l2 { device } => config.with_device(device.clone()),
            SourceConfig::Pattern => config,
        }
    }

    /// `None` for a code outside 0 to 3.
    pub fn display_rotation(&self) -> Option<Rotation> {
        Rotation::from_surface_code(self.display_rotation)
    }

    pub fn log_config(&self) -> Result<LogConfig, ConfigError> {
        let mut config = LogConfig::default();
        if let Some(level) = &self.log_level {
            let level = LevelFilter::from_str(level)
                .map_err(|_| ConfigError::Invalid(format!("unknown log level {level:?}")))?;
            config = config.with_level(level);
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_dir(dir.clone());
        }
        Ok(config)
    }
}
