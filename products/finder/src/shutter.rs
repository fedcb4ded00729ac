use finder_base::log;
use finder_camera::{CaptureError, Frame, JpegCapture};
use finder_vision::{UiEvent, UiSender};
use std::{path::PathBuf, sync::Arc};
use tokio::task::JoinHandle;

/// Save `frame` as a still and tell the user how it went.
pub async fn take_picture(
    capture: &JpegCapture,
    frame: Option<Arc<Frame>>,
    ui: &UiSender,
) -> Result<PathBuf, CaptureError> {
    let result = match frame {
        Some(frame) => capture.save(frame).await,
        None => Err(CaptureError::NoFrame),
    };

    match &result {
        Ok(path) => {
            let msg = format!("Photo capture succeeded: {}", path.display());
            log::info!("{msg}");
            ui.post(UiEvent::Toast(msg));
        }
        Err(e) => {
            log::error!("Photo capture failed: {e}");
            ui.post(UiEvent::Toast(format!("Photo capture failed: {e}")));
        }
    }

    result
}

/// Take a picture in the background, for the shutter key.
pub fn spawn_picture(
    capture: JpegCapture,
    frame: Option<Arc<Frame>>,
    ui: UiSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // the outcome is already logged and toasted
        if let Ok(path) = take_picture(&capture, frame, &ui).await {
            log::debug!("shutter: saved {}", path.display());
        }
    })
}
