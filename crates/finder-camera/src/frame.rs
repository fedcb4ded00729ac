use crate::CameraError;
use finder_base::Vec2;

/// How the planes of a frame are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneLayout {
    /// Luminance only.
    Luma,
    /// Y plane followed by one interleaved V/U plane at quarter resolution.
    Nv21,
    /// Separate Y, U and V planes, chroma at quarter resolution.
    I420,
}

impl PlaneLayout {
    pub fn plane_count(self) -> usize {
        match self {
            PlaneLayout::Luma => 1,
            PlaneLayout::Nv21 => 2,
            PlaneLayout::I420 => 3,
        }
    }
}

/// Number of chroma samples per chroma channel for a 4:2:0 frame.
pub fn chroma_len(size: Vec2<usize>) -> usize {
    size.x.div_ceil(2) * size.y.div_ceil(2)
}

/// A captured image made of one to three planes.
///
/// Frames are immutable once built. Plane buffers may be longer than the
/// nominal plane size (row padding), never shorter.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    planes: Vec<Vec<u8>>,
    size: Vec2<usize>,
    layout: PlaneLayout,
    rotation_degrees: i32,
    timestamp_ms: u64,
}

impl Frame {
    /// Build a frame from its planes, inferring the layout from the plane count.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Format` if there are no planes, more than three,
    /// or a plane is too short for `size`.
    pub fn from_planes(size: Vec2<usize>, planes: Vec<Vec<u8>>) -> Result<Self, CameraError> {
        let layout = match planes.len() {
            1 => PlaneLayout::Luma,
            2 => PlaneLayout::Nv21,
            3 => PlaneLayout::I420,
            n => {
                return Err(CameraError::Format(format!(
                    "expected 1 to 3 planes, got {n}"
                )));
            }
        };

        let chroma = chroma_len(size);
        let minimum = [size.area(), chroma, chroma];
        for (index, plane) in planes.iter().enumerate() {
            let expected = match layout {
                PlaneLayout::Nv21 if index == 1 => chroma * 2,
                _ => minimum[index],
            };
            if plane.len() < expected {
                return Err(CameraError::Format(format!(
                    "plane {index} holds {} bytes, {}x{} needs {expected}",
                    plane.len(),
                    size.x,
                    size.y
                )));
            }
        }

        Ok(Self {
            planes,
            size,
            layout,
            rotation_degrees: 0,
            timestamp_ms: 0,
        })
    }

    pub fn luma(size: Vec2<usize>, y: Vec<u8>) -> Result<Self, CameraError> {
        Self::from_planes(size, vec![y])
    }

    pub fn nv21(size: Vec2<usize>, y: Vec<u8>, vu: Vec<u8>) -> Result<Self, CameraError> {
        Self::from_planes(size, vec![y, vu])
    }

    pub fn i420(
        size: Vec2<usize>,
        y: Vec<u8>,
        u: Vec<u8>,
        v: Vec<u8>,
    ) -> Result<Self, CameraError> {
        Self::from_planes(size, vec![y, u, v])
    }

    /// Set the rotation reported by the source, in degrees.
    pub fn with_rotation_degrees(mut self, rotation_degrees: i32) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    /// Set the capture time in milliseconds.
    pub fn with_timestamp_ms(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn layout(&self) -> PlaneLayout {
        self.layout
    }

    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// The luminance plane, always the first one.
    pub fn luma_plane(&self) -> &[u8] {
        &self.planes[0]
    }

    pub fn rotation_degrees(&self) -> i32 {
        self.rotation_degrees
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Total number of bytes over all planes.
    pub fn byte_len(&self) -> usize {
        self.planes.iter().map(Vec::len).sum()
    }
}
