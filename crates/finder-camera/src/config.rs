use finder_base::Vec2;
use std::time::Duration;

/// What a frame source is asked to produce.
///
/// Both the synthetic `PatternCamera` and the `V4l2Camera` read it. The
/// pattern source ignores `device` and `buffer_count`.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    fps: u32,
    buffer_count: u32,
    rotation_degrees: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
            buffer_count: 4,
            rotation_degrees: 0,
        }
    }
}

impl CameraConfig {
    /// V4L2 capture node to open.
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Frame rate. The pattern source paces itself by it, V4L2 asks the
    /// driver for it.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Number of mmap buffers queued to the driver. The same number of
    /// converted frames may wait between the capture thread and the pump.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Sensor orientation in degrees, stamped on every frame for the
    /// analyzers.
    pub fn with_rotation_degrees(mut self, rotation_degrees: i32) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame_size(&self) -> Vec2<usize> {
        Vec2::new(self.width as usize, self.height as usize)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Time between frames, with 0 fps read as 1.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// At least 1, a zero-depth queue cannot hand anything over.
    pub fn buffer_count(&self) -> u32 {
        self.buffer_count.max(1)
    }

    pub fn rotation_degrees(&self) -> i32 {
        self.rotation_degrees
    }
}
