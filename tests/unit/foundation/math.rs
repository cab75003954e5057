use super::*;

#[test]
fn wrap_degrees_lands_in_half_open_range() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(360.0), 0.0);
    assert_eq!(wrap_degrees(725.0), 5.0);
    assert_eq!(wrap_degrees(-90.0), 270.0);
    assert!(wrap_degrees(-1e-18) < 360.0);
}

#[test]
fn angular_distance_is_symmetric_around_front() {
    assert_eq!(angular_distance(0.0), 0.0);
    assert_eq!(angular_distance(180.0), 180.0);
    assert_eq!(angular_distance(90.0), 90.0);
    assert_eq!(angular_distance(270.0), 90.0);
    assert_eq!(angular_distance(-30.0), 30.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(255, 128), 128);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(2.0), 255);
    assert_eq!(unit_to_u8(0.5), 128);
}
