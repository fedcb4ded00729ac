use finder::{render_preview, rgb_to_argb};
use finder_base::{Mat3, Rect, Vec2};
use finder_camera::{Frame, Rotation};
use finder_vision::{Category, DetectedObject, viewfinder_transform};

const GREEN: u32 = 0x0000_FF00;

// 2x2 luma frame: 10 20 / 30 40
fn frame() -> Frame {
    Frame::luma(Vec2::new(2, 2), vec![10, 20, 30, 40]).unwrap()
}

fn gray(l: u32) -> u32 {
    (l << 16) | (l << 8) | l
}

#[test]
fn test_rgb_to_argb() {
    assert_eq!(rgb_to_argb(&[1, 2, 3, 255, 0, 0], 2, 1), vec![0x010203, 0xFF0000]);
}

#[test]
fn test_identity_copies_frame() {
    let buffer = render_preview(&frame(), Mat3::identity(), Vec2::new(2, 2), &[]);
    assert_eq!(buffer, vec![gray(10), gray(20), gray(30), gray(40)]);
}

#[test]
fn test_upscales_to_view() {
    let buffer = render_preview(&frame(), Mat3::identity(), Vec2::new(4, 4), &[]);
    assert_eq!(buffer[0], gray(10));
    assert_eq!(buffer[1], gray(10));
    assert_eq!(buffer[3], gray(20));
    assert_eq!(buffer[15], gray(40));
}

#[test]
fn test_display_rotation_turns_image() {
    let view = Vec2::new(2, 2);
    let transform = viewfinder_transform(Some(Rotation::Deg90), view.to_f32());
    let buffer = render_preview(&frame(), transform, view, &[]);
    // rotated back by a quarter turn: 20 40 / 10 30
    assert_eq!(buffer, vec![gray(20), gray(40), gray(10), gray(30)]);
}

#[test]
fn test_object_outline_drawn() {
    let frame = Frame::luma(Vec2::new(8, 8), vec![0; 64]).unwrap();
    let object = DetectedObject {
        tracking_id: Some(1),
        bounds: Rect::new(Vec2::new(2, 2), Vec2::new(4, 4)),
        category: Category::Food,
        confidence: Some(0.9),
    };
    let buffer = render_preview(&frame, Mat3::identity(), Vec2::new(8, 8), &[object]);

    assert_eq!(buffer[2 * 8 + 2], GREEN);
    assert_eq!(buffer[2 * 8 + 5], GREEN);
    assert_eq!(buffer[5 * 8 + 2], GREEN);
    // inside stays untouched
    assert_eq!(buffer[3 * 8 + 3], 0);
}

#[test]
fn test_box_past_i32_range_is_clipped() {
    let frame = Frame::luma(Vec2::new(8, 8), vec![0; 64]).unwrap();
    let object = DetectedObject {
        tracking_id: None,
        bounds: Rect::new(Vec2::new(2_147_483_000, 0), Vec2::new(1000, 10)),
        category: Category::Unknown,
        confidence: None,
    };
    let buffer = render_preview(&frame, Mat3::identity(), Vec2::new(8, 8), &[object]);

    assert_eq!(buffer.len(), 64);
    assert!(buffer.iter().all(|&pixel| pixel == 0));
}

#[test]
fn test_empty_view() {
    assert!(render_preview(&frame(), Mat3::identity(), Vec2::new(0, 0), &[]).is_empty());
}
