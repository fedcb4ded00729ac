use finder_base::{Mat3, Vec2};
use finder_camera::Rotation;

/// Transform that undoes the display rotation for a viewfinder of `size`.
///
/// Rotates about the view center by the negated display rotation. Without a
/// known rotation the transform is the identity.
pub fn viewfinder_transform(display: Option<Rotation>, size: Vec2<f32>) -> Mat3<f32> {
    match display {
        Some(rotation) => Mat3::rotation_about(-(rotation.degrees() as f32), size / 2.0),
        None => Mat3::identity(),
    }
}
