use super::*;

#[test]
fn display_list_records_in_order() {
    let mut list = DisplayList::new(10, 10);
    list.fade(1.5);
    list.fill_circle(Point::new(1.0, 1.0), 2.0, Rgba8Premul::from_straight_rgba(1, 2, 3, 255));
    list.present().unwrap();
    assert_eq!(list.size(), (10, 10));
    assert_eq!(list.ops().len(), 2);
    assert_eq!(list.ops()[0], DrawOp::Fade { keep: 1.0 });
    assert!(list.ops()[0].is_compositing());
    assert!(!list.ops()[1].is_compositing());
    assert_eq!(list.circle_count(), 1);
    assert_eq!(list.presented(), 1);
    assert_eq!(list.take().len(), 2);
    assert!(list.ops().is_empty());
}

#[test]
fn invisible_shapes_are_skipped() {
    let mut list = DisplayList::new(10, 10);
    let c = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    list.fill_circle(Point::new(1.0, 1.0), 0.0, c);
    list.fill_circle(Point::new(1.0, 1.0), f64::NAN, c);
    list.fill_circle(Point::new(1.0, 1.0), 3.0, Rgba8Premul::transparent());
    list.fill_rect(Rect::new(0.0, 0.0, 0.0, 5.0), Affine::IDENTITY, c);
    assert!(list.ops().is_empty());
}

#[test]
fn frame_pixel_bounds_and_unpremultiply() {
    let mut frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), None);
    frame.unpremultiply();
    assert!(!frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([128, 0, 0, 128]));
}
