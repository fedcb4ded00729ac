//! The finder application: a live viewfinder with still capture and
//! throttled frame analysis.

pub mod app;
pub mod config;
pub mod gate;
pub mod preview;
pub mod shutter;
pub mod ui;

pub use app::{build_dispatcher, start_camera};
pub use config::{AppConfig, ConfigError, SourceConfig};
pub use gate::{PERMISSION_DENIED_TOAST, check_permission, permission_for};
pub use preview::{render_preview, rgb_to_argb};
pub use shutter::{spawn_picture, take_picture};
pub use ui::{TOAST_DURATION, UiState};
