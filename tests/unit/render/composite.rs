use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
}

#[test]
fn fade_decays_toward_transparent() {
    let mut buf = vec![200u8, 100, 50, 200];
    fade_in_place(&mut buf, 0.5);
    assert_eq!(buf, vec![100, 50, 25, 100]);

    let mut buf = vec![255u8; 4];
    for _ in 0..64 {
        fade_in_place(&mut buf, 0.9);
    }
    assert!(buf.iter().all(|&c| c < 255));
    assert!(buf[3] < 10);
}

#[test]
fn repeated_fade_reaches_zero() {
    let mut buf = vec![255u8; 4];
    for _ in 0..200 {
        fade_in_place(&mut buf, 0.9);
    }
    assert_eq!(buf, vec![0, 0, 0, 0]);
}

#[test]
fn fade_keep_one_is_identity_and_zero_clears() {
    let mut buf = vec![9u8, 8, 7, 6];
    fade_in_place(&mut buf, 1.0);
    assert_eq!(buf, vec![9, 8, 7, 6]);
    fade_in_place(&mut buf, 0.0);
    assert_eq!(buf, vec![0, 0, 0, 0]);
}

#[test]
fn fill_sets_every_pixel() {
    let mut buf = vec![0u8; 12];
    fill(&mut buf, [1, 2, 3, 4]);
    assert_eq!(buf, vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
}
