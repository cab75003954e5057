use super::*;

#[test]
fn premul_conversion_rounds_and_roundtrips_opaque() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c, Rgba8Premul { r: 128, g: 64, b: 0, a: 128 });
    let opaque = Rgba8Premul::from_straight_rgba(10, 20, 30, 255);
    assert_eq!(opaque.to_straight_rgba(), [10, 20, 30, 255]);
    assert_eq!(Rgba8Premul::transparent().to_straight_rgba(), [0, 0, 0, 0]);
}

#[test]
fn compact_viewport_rules() {
    assert!(!Viewport::new(1280.0, 720.0).prefers_compact());
    assert!(Viewport::new(500.0, 900.0).prefers_compact());
    assert!(
        Viewport::new(1280.0, 720.0)
            .with_coarse_pointer(true)
            .prefers_compact()
    );
}

#[test]
fn viewport_center_and_area() {
    let v = Viewport::new(200.0, 100.0);
    assert_eq!(v.center(), Point::new(100.0, 50.0));
    assert_eq!(v.area(), 20_000.0);
    assert_eq!(Viewport::new(-5.0, 10.0).area(), 0.0);
}
