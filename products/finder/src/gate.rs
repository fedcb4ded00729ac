use crate::SourceConfig;
use finder_camera::{AlwaysGranted, CameraPermission, DeviceAccess, PermissionStatus};
use finder_vision::{UiEvent, UiSender};

pub const PERMISSION_DENIED_TOAST: &str = "Permissions not granted by the user.";

/// Permission check matching the frame source.
pub fn permission_for(source: &SourceConfig) -> Box<dyn CameraPermission> {
    match source {
        SourceConfig::Pattern => Box::new(AlwaysGranted),
        SourceConfig::V4l2 { device } => Box::new(DeviceAccess::new(device)),
    }
}

/// Check once at startup. On denial the UI is told to show the refusal and
/// close.
pub fn check_permission(permission: &dyn CameraPermission, ui: &UiSender) -> bool {
    match permission.check() {
        PermissionStatus::Granted => true,
        PermissionStatus::Denied(reason) => {
            finder_base::log::error!("camera permission denied: {reason}");
            ui.post(UiEvent::Toast(PERMISSION_DENIED_TOAST.to_string()));
            ui.post(UiEvent::Close);
            false
        }
    }
}
