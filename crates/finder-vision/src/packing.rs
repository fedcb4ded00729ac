use finder_camera::{Frame, PlaneLayout, Rotation};

/// Pixel format of a packed frame, named after the plane arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Luma8,
    Nv21,
    I420,
}

impl From<PlaneLayout> for ImageFormat {
    fn from(layout: PlaneLayout) -> Self {
        match layout {
            PlaneLayout::Luma => ImageFormat::Luma8,
            PlaneLayout::Nv21 => ImageFormat::Nv21,
            PlaneLayout::I420 => ImageFormat::I420,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub rotation: Rotation,
}

/// All planes of a frame copied into one buffer, as handed to the ML services.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedFrame {
    pub data: Vec<u8>,
    pub metadata: ImageMetadata,
}

impl PackedFrame {
    pub fn pack(frame: &Frame, rotation: Rotation) -> Self {
        Self {
            data: concat_planes(frame),
            metadata: ImageMetadata {
                width: frame.width() as u32,
                height: frame.height() as u32,
                format: frame.layout().into(),
                rotation,
            },
        }
    }
}

/// Copy every plane, in order, into one contiguous buffer.
pub fn concat_planes(frame: &Frame) -> Vec<u8> {
    let mut data = Vec::with_capacity(frame.byte_len());
    for plane in frame.planes() {
        data.extend_from_slice(plane);
    }
    data
}
