use finder_camera::Rotation;

#[test]
fn test_from_degrees_known_values() {
    assert_eq!(Rotation::from_degrees(0), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(90), Rotation::Deg90);
    assert_eq!(Rotation::from_degrees(180), Rotation::Deg180);
    assert_eq!(Rotation::from_degrees(270), Rotation::Deg270);
}

#[test]
fn test_from_degrees_unknown_maps_to_zero() {
    for degrees in [45, 360, -90, 1, 271] {
        assert_eq!(Rotation::from_degrees(degrees), Rotation::Deg0, "{degrees}");
        assert_eq!(Rotation::try_from_degrees(degrees), None, "{degrees}");
    }
}

#[test]
fn test_degrees_round_trip() {
    for rotation in Rotation::ALL {
        assert_eq!(Rotation::from_degrees(rotation.degrees()), rotation);
    }
}

#[test]
fn test_surface_codes() {
    assert_eq!(Rotation::from_surface_code(0), Some(Rotation::Deg0));
    assert_eq!(Rotation::from_surface_code(1), Some(Rotation::Deg90));
    assert_eq!(Rotation::from_surface_code(2), Some(Rotation::Deg180));
    assert_eq!(Rotation::from_surface_code(3), Some(Rotation::Deg270));
    assert_eq!(Rotation::from_surface_code(4), None);
    assert_eq!(Rotation::from_surface_code(-1), None);
    assert_eq!(Rotation::Deg270.code(), 3);
}

#[test]
fn test_next_cycles_clockwise() {
    assert_eq!(Rotation::Deg0.next(), Rotation::Deg90);
    assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
    assert_eq!(Rotation::default(), Rotation::Deg0);
}
