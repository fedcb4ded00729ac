//! Shared building blocks for the finder workspace: the logging backends
//! and the small amount of 2D math the viewfinder and overlays need.

pub mod logging;
pub mod mat3;
pub mod rect;
pub mod vec2;
pub mod vec3;

pub use logging::{FileLogger, LogConfig, StdoutLogger, init_logging};
pub use mat3::Mat3;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use finder_base::log::*
pub use log;
