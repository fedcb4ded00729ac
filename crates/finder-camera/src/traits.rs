use crate::{CameraError, Frame};
use std::future::Future;

/// Async camera trait for frame capture.
///
/// Implementations provide a `recv` method that asynchronously returns the
/// next captured `Frame`. The returned future is `Send` so a camera can be
/// pumped from a spawned task.
pub trait Camera {
    /// Receive the next frame from the camera.
    fn recv(&mut self) -> impl Future<Output = Result<Frame, CameraError>> + Send;
}
