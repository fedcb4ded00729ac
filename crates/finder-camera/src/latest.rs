use crate::{Camera, CameraError, Frame};
use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, task::JoinHandle};

// delay before capturing again after a failed frame
const WAIT_BEFORE_RETRY_MS: u64 = 100;

type Slot = Option<Arc<Frame>>;

/// Create a keep-latest frame slot.
///
/// The slot only ever holds the newest frame: publishing replaces whatever
/// was there, so a slow consumer skips frames instead of building a backlog.
pub fn latest_frame() -> (FramePublisher, FrameSubscriber) {
    let (sender, receiver) = watch::channel(None);
    (FramePublisher { sender }, FrameSubscriber { receiver })
}

/// Writing end of the keep-latest slot.
#[derive(Debug)]
pub struct FramePublisher {
    sender: watch::Sender<Slot>,
}

impl FramePublisher {
    /// Replace the held frame. Returns `false` once every subscriber is gone.
    pub fn publish(&self, frame: Frame) -> bool {
        self.sender.send_replace(Some(Arc::new(frame)));
        !self.sender.is_closed()
    }

    pub fn subscribe(&self) -> FrameSubscriber {
        FrameSubscriber {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Reading end of the keep-latest slot.
#[derive(Debug, Clone)]
pub struct FrameSubscriber {
    receiver: watch::Receiver<Slot>,
}

impl FrameSubscriber {
    /// Wait for a frame this subscriber has not seen yet.
    ///
    /// Returns `None` when the publisher is gone.
    pub async fn next(&mut self) -> Option<Arc<Frame>> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(frame) = self.receiver.borrow_and_update().clone() {
                return Some(frame);
            }
        }
    }

    /// The newest frame, seen or not.
    pub fn current(&self) -> Option<Arc<Frame>> {
        self.receiver.borrow().clone()
    }
}

/// Move frames from `camera` into the slot on a spawned task.
///
/// Stream errors are logged and capture is retried after a short delay.
/// The task ends on a channel error or when no subscriber is left.
pub fn spawn_pump<C>(mut camera: C, publisher: FramePublisher) -> JoinHandle<()>
where
    C: Camera + Send + 'static,
{
    tokio::spawn(async move {
        log::info!("camera pump: starting capture loop");
        loop {
            match camera.recv().await {
                Ok(frame) => {
                    if !publisher.publish(frame) {
                        log::info!("camera pump: no subscribers left, stopping");
                        break;
                    }
                }
                Err(CameraError::Channel(msg)) => {
                    log::error!("camera pump: frame channel closed: {msg}");
                    break;
                }
                Err(error) => {
                    log::error!("camera pump: capture failed: {error}");
                    tokio::time::sleep(Duration::from_millis(WAIT_BEFORE_RETRY_MS)).await;
                }
            }
        }
    })
}
