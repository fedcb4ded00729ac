use crate::{Frame, PlaneLayout, frame::chroma_len};
use finder_base::Vec2;

/// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8).
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}

/// Split packed YUYV (4:2:2) into Y, U and V planes (4:2:0).
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`. Chroma is taken from even rows
/// only. Returns `None` for an odd or zero width, a zero height, or a buffer
/// shorter than `width * height * 2`.
pub fn yuyv_to_i420(size: Vec2<usize>, data: &[u8]) -> Option<[Vec<u8>; 3]> {
    let (width, height) = (size.x, size.y);
    if width == 0 || height == 0 || width % 2 != 0 || data.len() < width * height * 2 {
        return None;
    }

    let mut y = Vec::with_capacity(size.area());
    let mut u = Vec::with_capacity(chroma_len(size));
    let mut v = Vec::with_capacity(chroma_len(size));

    for (row, line) in data[..width * height * 2].chunks_exact(width * 2).enumerate() {
        for chunk in line.chunks_exact(4) {
            y.push(chunk[0]);
            y.push(chunk[2]);
            if row % 2 == 0 {
                u.push(chunk[1]);
                v.push(chunk[3]);
            }
        }
    }

    Some([y, u, v])
}

/// Convert separate Y, U, V planes (4:2:0) to packed RGB.
pub fn i420_to_rgb(size: Vec2<usize>, y: &[u8], u: &[u8], v: &[u8]) -> Vec<u8> {
    let (width, height) = (size.x, size.y);
    let uv_w = width.div_ceil(2);
    let mut rgb = Vec::with_capacity(size.area() * 3);

    for row in 0..height {
        for col in 0..width {
            let c = (row / 2) * uv_w + col / 2;
            let (r, g, b) = yuv_to_rgb(y[row * width + col], u[c], v[c]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    rgb
}

/// Convert a Y plane plus interleaved V/U plane (NV21) to packed RGB.
pub fn nv21_to_rgb(size: Vec2<usize>, y: &[u8], vu: &[u8]) -> Vec<u8> {
    let (width, height) = (size.x, size.y);
    let uv_w = width.div_ceil(2);
    let mut rgb = Vec::with_capacity(size.area() * 3);

    for row in 0..height {
        for col in 0..width {
            let c = ((row / 2) * uv_w + col / 2) * 2;
            let (r, g, b) = yuv_to_rgb(y[row * width + col], vu[c + 1], vu[c]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    rgb
}

/// Packed RGB rendition of any frame. Luma-only frames become gray.
pub fn frame_to_rgb(frame: &Frame) -> Vec<u8> {
    let size = frame.size();
    let planes = frame.planes();
    match frame.layout() {
        PlaneLayout::Luma => planes[0][..size.area()]
            .iter()
            .flat_map(|&l| [l, l, l])
            .collect(),
        PlaneLayout::Nv21 => nv21_to_rgb(size, &planes[0], &planes[1]),
        PlaneLayout::I420 => i420_to_rgb(size, &planes[0], &planes[1], &planes[2]),
    }
}
