use super::*;
use crate::render::surface::DisplayList;

#[test]
fn handles_are_unique_and_cancellable() {
    let mut h = HeadlessHost::new(Viewport::new(10.0, 10.0), DisplayList::new(10, 10));
    let a = h.request_frame();
    let b = h.request_frame();
    let l = h.add_listener(EventKind::Scroll);
    assert_ne!(a, b);
    assert_ne!(a.0, l.0);
    assert_eq!(h.pending_frames(), &[a, b]);

    h.cancel_frame(a);
    h.cancel_frame(FrameRequest(999));
    assert_eq!(h.pending_frames(), &[b]);

    assert!(h.has_listener(l));
    h.remove_listener(l);
    h.remove_listener(ListenerId(999));
    assert_eq!(h.listener_count(), 0);
}

#[test]
fn resize_dispatch_updates_viewport() {
    let mut h = HeadlessHost::new(Viewport::new(10.0, 10.0), DisplayList::new(10, 10));
    let mut lp = EffectLoop::new(crate::effects::starfield::StarfieldEffect::default());
    lp.start(&mut h);
    let v = Viewport::new(40.0, 30.0);
    assert!(h.dispatch(&mut lp, InputEvent::Resize(v)));
    assert_eq!(h.viewport(), v);
    lp.stop(&mut h);
}

#[test]
fn clock_advances_with_steps() {
    let mut h = HeadlessHost::new(Viewport::new(10.0, 10.0), DisplayList::new(10, 10));
    let mut lp = EffectLoop::new(crate::effects::starfield::StarfieldEffect::default());
    lp.start(&mut h);
    h.run_frames(&mut lp, 4, 0.25);
    assert!((h.clock_secs() - 1.0).abs() < 1e-12);
    h.step(&mut lp, -1.0);
    assert!((h.clock_secs() - 1.0).abs() < 1e-12);
    lp.stop(&mut h);
}
