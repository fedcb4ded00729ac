use finder_base::{Rect, Vec2};

#[test]
fn test_from_min_max() {
    let r = Rect::<i32>::from_min_max(Vec2::new(1, 2), Vec2::new(4, 6));
    assert_eq!(r.origin, Vec2::new(1, 2));
    assert_eq!(r.size, Vec2::new(3, 4));
    assert_eq!(r.max(), Vec2::new(4, 6));
}

#[test]
fn test_from_corners_any_order() {
    let a = Rect::from_corners(Vec2::new(10.0_f32, 2.0), Vec2::new(4.0, 8.0));
    assert_eq!(a.origin, Vec2::new(4.0, 2.0));
    assert_eq!(a.size, Vec2::new(6.0, 6.0));

    let b = Rect::from_corners(Vec2::new(4.0_f32, 8.0), Vec2::new(10.0, 2.0));
    assert_eq!(a, b);
}

#[test]
fn test_contains_point_edges() {
    let r = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
    assert!(r.contains_point(Vec2::new(0, 0)));
    assert!(r.contains_point(Vec2::new(9, 9)));
    // max edge is exclusive
    assert!(!r.contains_point(Vec2::new(10, 10)));
    assert!(!r.contains_point(Vec2::new(-1, 5)));
}

#[test]
fn test_intersection_overlapping() {
    let a = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
    let b = Rect::new(Vec2::new(5, 5), Vec2::new(10, 10));
    let i = a.intersection(b).unwrap();
    assert_eq!(i.origin, Vec2::new(5, 5));
    assert_eq!(i.size, Vec2::new(5, 5));
}

#[test]
fn test_intersection_touching_edge_is_none() {
    let a = Rect::new(Vec2::new(0, 0), Vec2::new(5, 5));
    let b = Rect::new(Vec2::new(5, 0), Vec2::new(5, 5));
    assert!(!a.intersects(b));
    assert!(a.intersection(b).is_none());
}

#[test]
fn test_default_is_zero() {
    let r = Rect::<i32>::default();
    assert_eq!(r.origin, Vec2::new(0, 0));
    assert_eq!(r.size, Vec2::new(0, 0));
}
