use std::{fs::OpenOptions, path::PathBuf};

/// Outcome of a camera permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    /// Denied, with the reason reported by the platform.
    Denied(String),
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Decides whether the camera may be used.
pub trait CameraPermission {
    fn check(&self) -> PermissionStatus;
}

/// Grants access when the capture device can be opened for reading and writing.
#[derive(Debug, Clone)]
pub struct DeviceAccess {
    path: PathBuf,
}

impl DeviceAccess {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CameraPermission for DeviceAccess {
    fn check(&self) -> PermissionStatus {
        match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(_) => PermissionStatus::Granted,
            Err(e) => {
                log::warn!("camera permission: cannot open {}: {e}", self.path.display());
                PermissionStatus::Denied(e.to_string())
            }
        }
    }
}

/// Used for sources that need no device, such as the synthetic pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

impl CameraPermission for AlwaysGranted {
    fn check(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }
}
