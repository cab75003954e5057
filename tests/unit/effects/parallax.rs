use super::*;
use crate::render::surface::{DisplayList, DrawOp};
use crate::runtime::effect::EffectLoop;
use crate::runtime::host::HeadlessHost;

#[test]
fn progress_spans_section_entry_to_exit() {
    // Section at 1000..1500 in an 800px viewport: enters at 200, exits at 1500.
    assert_eq!(scroll_progress(0.0, 1000.0, 500.0, 800.0), 0.0);
    assert_eq!(scroll_progress(200.0, 1000.0, 500.0, 800.0), 0.0);
    assert!((scroll_progress(850.0, 1000.0, 500.0, 800.0) - 0.5).abs() < 1e-12);
    assert_eq!(scroll_progress(1500.0, 1000.0, 500.0, 800.0), 1.0);
    assert_eq!(scroll_progress(9000.0, 1000.0, 500.0, 800.0), 1.0);
}

#[test]
fn progress_handles_degenerate_input() {
    assert_eq!(scroll_progress(f64::NAN, 0.0, 100.0, 100.0), 0.0);
    assert_eq!(scroll_progress(f64::INFINITY, 0.0, 100.0, 100.0), 0.0);
    assert_eq!(scroll_progress(-1.0, 0.0, 0.0, 0.0), 0.0);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0, 0.0), 1.0);
}

#[test]
fn curves_hit_their_endpoints_exactly() {
    let c = ParallaxVariant::ZoomInReveal.curves();
    let start = c.sample(0.0);
    assert_eq!(start.scale, 1.0);
    assert_eq!(start.overlay_opacity, 0.0);
    assert_eq!(start.content_opacity, 0.0);
    let end = c.sample(1.0);
    assert_eq!(end.scale, 1.4);
    assert_eq!(end.overlay_opacity, 0.55);
    assert_eq!(end.content_opacity, 1.0);

    let c = ParallaxVariant::ZoomOutFade.curves();
    assert_eq!(c.sample(0.0).scale, 1.3);
    assert_eq!(c.sample(1.0).scale, 1.0);
    assert_eq!(c.sample(0.0).content_opacity, 1.0);
    assert_eq!(c.sample(0.7).content_opacity, 0.0);
}

#[test]
fn curves_are_monotone_in_progress() {
    for variant in [ParallaxVariant::ZoomInReveal, ParallaxVariant::ZoomOutFade] {
        let c = variant.curves();
        let sign = |curve: &Curve| (curve.range[1] - curve.range[0]).signum();
        let mut prev = c.sample(0.0);
        for i in 1..=200 {
            let f = c.sample(f64::from(i) / 200.0);
            assert!(sign(&c.scale) * (f.scale - prev.scale) >= -1e-12);
            assert!(sign(&c.overlay) * (f.overlay_opacity - prev.overlay_opacity) >= -1e-12);
            assert!(sign(&c.content) * (f.content_opacity - prev.content_opacity) >= -1e-12);
            prev = f;
        }
    }
}

#[test]
fn variant_follows_pointer_and_width() {
    assert_eq!(
        ParallaxVariant::for_viewport(Viewport::new(1440.0, 900.0)),
        ParallaxVariant::ZoomInReveal
    );
    assert_eq!(
        ParallaxVariant::for_viewport(Viewport::new(390.0, 844.0)),
        ParallaxVariant::ZoomOutFade
    );
    assert_eq!(
        ParallaxVariant::for_viewport(Viewport::new(1440.0, 900.0).with_coarse_pointer(true)),
        ParallaxVariant::ZoomOutFade
    );
}

#[test]
fn variant_is_fixed_after_mount() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default());
    fx.mount(Viewport::new(1440.0, 900.0)).unwrap();
    assert_eq!(fx.variant(), ParallaxVariant::ZoomInReveal);
    fx.handle_event(&InputEvent::Resize(Viewport::new(390.0, 844.0)));
    assert_eq!(fx.variant(), ParallaxVariant::ZoomInReveal);
}

#[test]
fn configured_variant_overrides_viewport() {
    let mut fx = ParallaxEffect::new(ParallaxConfig {
        variant: Some(ParallaxVariant::ZoomOutFade),
        ..ParallaxConfig::default()
    });
    fx.mount(Viewport::new(1440.0, 900.0)).unwrap();
    assert_eq!(fx.variant(), ParallaxVariant::ZoomOutFade);
}

#[test]
fn scroll_events_drive_the_frame() {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut h = HeadlessHost::new(viewport, DisplayList::new(1280, 720));
    let mut lp = EffectLoop::new(ParallaxEffect::new(ParallaxConfig::default()));
    lp.start(&mut h);
    assert_eq!(lp.effect().frame().scale, 1.0);

    // Section 720..2160: progress 1 at scroll 2160.
    h.dispatch(&mut lp, InputEvent::Scroll { scroll_y: 2160.0 });
    assert_eq!(lp.effect().progress(), 1.0);
    assert_eq!(lp.effect().frame().scale, 1.4);

    h.dispatch(&mut lp, InputEvent::Scroll { scroll_y: f64::NAN });
    assert_eq!(lp.effect().scroll_y(), 2160.0);
    lp.stop(&mut h);
}

#[test]
fn draw_scales_image_about_center() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default());
    let viewport = Viewport::new(800.0, 600.0);
    fx.mount(viewport).unwrap();
    fx.on_scroll(10_000.0);
    let mut list = DisplayList::new(800, 600);
    fx.draw(&mut list);

    let image = list.ops().iter().find_map(|op| match op {
        DrawOp::Rect { transform, .. } if *transform != Affine::IDENTITY => Some(*transform),
        _ => None,
    });
    let transform = image.unwrap();
    let c = viewport.center();
    let mapped = transform * c;
    assert!((mapped.x - c.x).abs() < 1e-9 && (mapped.y - c.y).abs() < 1e-9);
    assert!((transform.determinant() - 1.4 * 1.4).abs() < 1e-9);
}

#[test]
fn invalid_geometry_is_rejected() {
    let mut fx = ParallaxEffect::new(ParallaxConfig {
        section_height: -1.0,
        ..ParallaxConfig::default()
    });
    assert!(fx.mount(Viewport::default()).is_err());
}
