use super::*;
use crate::foundation::core::{Point, Rect};

fn red() -> Rgba8Premul {
    Rgba8Premul::from_straight_rgba(255, 0, 0, 255)
}

#[test]
fn rejects_degenerate_sizes() {
    assert!(matches!(CpuSurface::new(0, 10), Err(KonaError::Surface(_))));
    assert!(matches!(
        CpuSurface::new(70_000, 10),
        Err(KonaError::Surface(_))
    ));
    assert!(CpuSurface::for_viewport(Viewport::new(f64::NAN, 10.0)).is_err());
    assert_eq!(
        CpuSurface::for_viewport(Viewport::new(10.2, 4.0))
            .unwrap()
            .size(),
        (11, 4)
    );
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = CpuSurface::new(4, 4).unwrap();
    s.clear(Rgba8Premul::from_straight_rgba(0, 0, 255, 255));
    s.present().unwrap();
    let frame = s.to_frame();
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    assert_eq!(frame.pixel(3, 3), Some([0, 0, 255, 255]));
}

#[test]
fn circle_covers_its_center_only() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.fill_circle(Point::new(16.0, 16.0), 6.0, red());
    s.present().unwrap();
    let frame = s.to_frame();
    assert_eq!(frame.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn fade_decays_previous_frames() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Affine::IDENTITY, red());
    s.present().unwrap();
    s.fade(0.5);
    s.present().unwrap();
    let px = s.to_frame().pixel(8, 8).unwrap();
    assert!(px[3] > 100 && px[3] < 140, "{px:?}");
}

#[test]
fn ops_apply_in_order() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Affine::IDENTITY, red());
    s.clear(Rgba8Premul::transparent());
    s.present().unwrap();
    assert_eq!(s.to_frame().pixel(4, 4), Some([0, 0, 0, 0]));
}
