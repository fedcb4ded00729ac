//! Camera side of finder.
//!
//! Frames arrive from a `Camera` backend, get pumped into a keep-latest slot
//! and are shared read-only with the analyzers. Still photos are written
//! from the same frames.

pub mod capture;
pub mod config;
pub mod convert;
pub mod error;
pub mod frame;
pub mod latest;
pub mod pattern;
pub mod permission;
pub mod rotation;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use capture::{CaptureError, JpegCapture};
pub use config::CameraConfig;
pub use error::CameraError;
pub use frame::{Frame, PlaneLayout};
pub use latest::{FramePublisher, FrameSubscriber, latest_frame, spawn_pump};
pub use pattern::PatternCamera;
pub use permission::{AlwaysGranted, CameraPermission, DeviceAccess, PermissionStatus};
pub use rotation::Rotation;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
