use finder_base::{Mat3, Rect, Vec2};
use finder_camera::{Frame, convert::frame_to_rgb};
use finder_vision::DetectedObject;

const BOX_COLOR: u32 = 0x0000_FF00;

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    buf.chunks_exact(3)
        .take(width * height)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

/// Draw `frame` into a `view`-sized ARGB buffer.
///
/// The frame is scaled to fill the view and then mapped through `transform`,
/// given in view coordinates. Detection boxes, in frame coordinates, are
/// outlined on top. Pixels with no source stay black.
pub fn render_preview(
    frame: &Frame,
    transform: Mat3<f32>,
    view: Vec2<usize>,
    objects: &[DetectedObject],
) -> Vec<u32> {
    let mut buffer = vec![0u32; view.area()];
    if view.area() == 0 || frame.size().area() == 0 {
        return buffer;
    }

    let argb = rgb_to_argb(&frame_to_rgb(frame), frame.width(), frame.height());
    let inverse = transform.inverse().unwrap_or_else(Mat3::identity);
    let scale = Vec2::new(
        frame.width() as f32 / view.x as f32,
        frame.height() as f32 / view.y as f32,
    );

    for y in 0..view.y {
        for x in 0..view.x {
            let source = inverse.transform_point(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
            let (sx, sy) = (source.x * scale.x, source.y * scale.y);
            if sx < 0.0 || sy < 0.0 {
                continue;
            }
            let (sx, sy) = (sx as usize, sy as usize);
            if sx < frame.width() && sy < frame.height() {
                buffer[y * view.x + x] = argb[sy * frame.width() + sx];
            }
        }
    }

    for object in objects {
        let outline = box_in_view(object.bounds, frame.size(), transform, view);
        draw_outline(&mut buffer, view, outline);
    }

    buffer
}

/// Map a frame-space box into view space. Right-angle transforms keep it
/// axis aligned.
fn box_in_view(
    bounds: Rect<i32>,
    frame: Vec2<usize>,
    transform: Mat3<f32>,
    view: Vec2<usize>,
) -> Rect<f32> {
    let scale = Vec2::new(
        view.x as f32 / frame.x as f32,
        view.y as f32 / frame.y as f32,
    );
    // corners in f32, origin + size may not fit in i32
    let origin = Vec2::new(bounds.origin.x as f32, bounds.origin.y as f32);
    let far = origin + Vec2::new(bounds.size.x as f32, bounds.size.y as f32);
    let to_view =
        |p: Vec2<f32>| transform.transform_point(Vec2::new(p.x * scale.x, p.y * scale.y));
    Rect::from_corners(to_view(origin), to_view(far))
}

fn draw_outline(buffer: &mut [u32], view: Vec2<usize>, outline: Rect<f32>) {
    let clip = Rect::new(Vec2::new(0.0, 0.0), view.to_f32());
    let Some(visible) = outline.intersection(clip) else {
        return;
    };
    let min = Vec2::new(visible.min().x as usize, visible.min().y as usize);
    let max = Vec2::new(
        (visible.max().x.ceil() as usize).min(view.x) - 1,
        (visible.max().y.ceil() as usize).min(view.y) - 1,
    );

    let outline_max = outline.max();
    for x in min.x..=max.x {
        if outline.origin.y >= 0.0 {
            buffer[min.y * view.x + x] = BOX_COLOR;
        }
        if outline_max.y <= view.y as f32 {
            buffer[max.y * view.x + x] = BOX_COLOR;
        }
    }
    for y in min.y..=max.y {
        if outline.origin.x >= 0.0 {
            buffer[y * view.x + min.x] = BOX_COLOR;
        }
        if outline_max.x <= view.x as f32 {
            buffer[y * view.x + max.x] = BOX_COLOR;
        }
    }
}
