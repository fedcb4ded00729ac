use crate::DetectedObject;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Something the UI thread should show.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Replace the label text.
    LabelText(String),
    /// Replace the overlaid detection boxes.
    Objects(Vec<DetectedObject>),
    Luminance(f64),
    /// Short-lived notification.
    Toast(String),
    /// Close the screen.
    Close,
}

/// Posting end of the UI channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UiSender {
    sender: mpsc::Sender<UiEvent>,
}

impl UiSender {
    /// Queue `event` without waiting. A full or closed channel drops the
    /// event and logs it. Returns whether the event was queued.
    pub fn post(&self, event: UiEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                log::warn!("ui channel full, dropping {event:?}");
                false
            }
            Err(TrySendError::Closed(event)) => {
                log::debug!("ui channel closed, dropping {event:?}");
                false
            }
        }
    }
}

/// Create the bounded UI channel. The receiver belongs to the UI thread.
pub fn ui_channel(capacity: usize) -> (UiSender, mpsc::Receiver<UiEvent>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (UiSender { sender }, receiver)
}
