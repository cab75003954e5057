use super::*;

#[test]
fn endpoints_hit_range_exactly_for_every_ease() {
    for ease in Ease::ALL {
        let c = Curve::new([0.2, 0.8], [1.3, 0.4]).with_ease(ease);
        assert_eq!(c.sample(0.0), 1.3);
        assert_eq!(c.sample(0.2), 1.3);
        assert_eq!(c.sample(0.8), 0.4);
        assert_eq!(c.sample(1.0), 0.4);
    }
}

#[test]
fn linear_midpoint() {
    let c = Curve::new([0.0, 1.0], [10.0, 20.0]);
    assert!((c.sample(0.5) - 15.0).abs() < 1e-12);
}

#[test]
fn increasing_range_is_monotone() {
    let c = Curve::new([0.0, 1.0], [1.0, 1.4]).with_ease(Ease::OutCubic);
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=100 {
        let v = c.sample(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn degenerate_domain_is_a_step() {
    let c = Curve::new([0.5, 0.5], [0.0, 1.0]);
    assert_eq!(c.sample(0.49), 0.0);
    assert_eq!(c.sample(0.5), 1.0);
}

#[test]
fn nan_progress_holds_start() {
    let c = Curve::new([0.0, 1.0], [3.0, 4.0]);
    assert_eq!(c.sample(f64::NAN), 3.0);
}

#[test]
fn validate_rejects_bad_bounds() {
    assert!(Curve::new([0.0, 1.0], [0.0, f64::INFINITY]).validate().is_err());
    assert!(Curve::new([1.0, 0.0], [0.0, 1.0]).validate().is_err());
    assert!(Curve::new([0.0, 1.0], [1.0, 0.0]).validate().is_ok());
}

#[test]
fn sample_between_uses_curve_timing() {
    let c = Curve::new([0.0, 2.0], [0.0, 1.0]);
    let v = c.sample_between(1.0, &Vec2::new(0.0, 0.0), &Vec2::new(10.0, 4.0));
    assert_eq!(v, Vec2::new(5.0, 2.0));
}
