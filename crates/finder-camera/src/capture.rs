use crate::{Frame, convert::frame_to_rgb};
use image::{ExtendedColorType, ImageEncoder, codecs::jpeg::JpegEncoder};
use std::{
    fmt, io,
    path::{Path, PathBuf},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

const DEFAULT_QUALITY: u8 = 90;

#[derive(Debug)]
pub enum CaptureError {
    /// No frame has been captured yet.
    NoFrame,
    Encode(String),
    Io(io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoFrame => write!(f, "no frame available"),
            CaptureError::Encode(msg) => write!(f, "encode error: {msg}"),
            CaptureError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CaptureError {
    fn from(err: io::Error) -> Self {
        CaptureError::Io(err)
    }
}

/// Writes still photos as JPEG files named after the capture time.
#[derive(Debug, Clone)]
pub struct JpegCapture {
    dir: PathBuf,
    quality: u8,
}

impl JpegCapture {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Set the JPEG quality (1-100).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode `frame` and write it to `<dir>/<millis>.jpg`, creating the
    /// directory if needed. Returns the absolute path of the new file.
    ///
    /// Encoding runs on tokio's blocking thread pool.
    pub async fn save(&self, frame: Arc<Frame>) -> Result<PathBuf, CaptureError> {
        let quality = self.quality;
        let jpeg = tokio::task::spawn_blocking(move || encode_jpeg(&frame, quality))
            .await
            .map_err(|e| CaptureError::Encode(e.to_string()))??;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = std::path::absolute(self.dir.join(format!("{}.jpg", now_ms())))?;
        tokio::fs::write(&path, jpeg).await?;

        log::debug!("capture: wrote {}", path.display());
        Ok(path)
    }
}

/// Encode a frame as JPEG bytes.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, CaptureError> {
    let rgb = frame_to_rgb(frame);
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &rgb,
            frame.width() as u32,
            frame.height() as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CaptureError::Encode(e.to_string()))?;
    Ok(buffer)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
