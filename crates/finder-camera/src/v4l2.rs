use crate::{Camera, CameraConfig, CameraError, Frame, convert::yuyv_to_i420};
use finder_base::Vec2;
use std::{
    thread::{self, JoinHandle},
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::sync::mpsc;
use v4l::{
    Device, Format, FourCC,
    buffer::Type,
    io::{mmap::Stream as MmapStream, traits::CaptureStream},
    video::Capture,
};

type FrameResult = Result<Frame, CameraError>;

/// V4L2 capture device delivering YUYV, handed out as I420 frames.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("device", &"<v4l::Device>")
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("capture thread ended".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // closing the channel stops the capture thread at its next frame
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()` and negotiate YUYV at the
    /// requested resolution and frame rate.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, refuses
    /// YUYV, or rejects the format or rate.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"YUYV"));
        format = Capture::set_format(&device, &format)?;
        if format.fourcc != FourCC::new(b"YUYV") {
            return Err(CameraError::Device(format!(
                "{} does not support YUYV",
                config.device()
            )));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        // the driver may have picked a nearby resolution
        let config = config
            .with_width(format.width)
            .with_height(format.height);

        log::info!(
            "v4l2: opened {} at {}x{} @ {} fps",
            config.device(),
            config.width(),
            config.height(),
            config.fps()
        );

        Ok(Self {
            config,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread on first use.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let size = self.config.frame_size();
        let rotation_degrees = self.config.rotation_degrees();
        let (tx, rx) = mpsc::channel(buffer_count);

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, tx, buffer_count, size, rotation_degrees) {
                log::error!("v4l2: capture thread stopped: {e}");
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Blocking loop: dequeue YUYV buffers, split them into I420 frames and
    /// send them until the receiver goes away.
    fn capture_loop(
        device: Device,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
        size: Vec2<usize>,
        rotation_degrees: i32,
    ) -> Result<(), CameraError> {
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            let (data, _metadata) = CaptureStream::next(&mut stream)?;

            // a short buffer is reported to the consumer, the stream keeps going
            let frame = match yuyv_to_i420(size, data) {
                Some([y, u, v]) => Frame::i420(size, y, u, v).map(|frame| {
                    frame
                        .with_rotation_degrees(rotation_degrees)
                        .with_timestamp_ms(now_ms())
                }),
                None => Err(CameraError::Stream(format!(
                    "short YUYV buffer: {} bytes for {}x{}",
                    data.len(),
                    size.x,
                    size.y
                ))),
            };

            if tx.blocking_send(frame).is_err() {
                break;
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
