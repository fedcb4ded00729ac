use crate::{Camera, CameraConfig, CameraError, Frame, frame::chroma_len};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::{Interval, MissedTickBehavior};

/// Synthetic camera producing a moving gradient in I420.
///
/// Stands in for real hardware on machines without a capture device. Frames
/// are paced at the configured fps and carry the configured rotation.
#[derive(Debug)]
pub struct PatternCamera {
    config: CameraConfig,
    interval: Option<Interval>,
    frame_index: u64,
}

impl PatternCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            interval: None,
            frame_index: 0,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Render frame number `index` without waiting for the frame clock.
    pub fn frame_at(&self, index: u64) -> Result<Frame, CameraError> {
        let size = self.config.frame_size();
        let shift = (index * 4) as usize;

        let mut y = Vec::with_capacity(size.area());
        for row in 0..size.y {
            for col in 0..size.x {
                y.push(((col + row / 2 + shift) & 0xFF) as u8);
            }
        }
        // slow hue drift
        let u = vec![(128 + (index % 64) as u8).wrapping_sub(32); chroma_len(size)];
        let v = vec![128u8; chroma_len(size)];

        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Ok(Frame::i420(size, y, u, v)?
            .with_rotation_degrees(self.config.rotation_degrees())
            .with_timestamp_ms(timestamp_ms))
    }
}

impl Camera for PatternCamera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        let period = self.config.frame_interval();
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;

        let frame = self.frame_at(self.frame_index)?;
        self.frame_index += 1;
        Ok(frame)
    }
}
