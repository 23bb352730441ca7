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
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_semi_transparent_black_dims_white() {
    // Premultiplied black at alpha 128 over opaque white: the white keeps
    // 127/255 of its value and the result stays opaque.
    let dst = [255, 255, 255, 255];
    let src = [0, 0, 0, 128];
    assert_eq!(over(dst, src, 1.0), [127, 127, 127, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(over_in_place(&mut dst, &src, 1.0).is_err());

    let mut ragged = vec![0u8; 6];
    let src6 = vec![0u8; 6];
    assert!(over_in_place(&mut ragged, &src6, 1.0).is_err());
}

#[test]
fn over_in_place_composites_every_pixel() {
    let mut dst = vec![255u8, 255, 255, 255, 0, 0, 0, 0];
    let src = vec![0u8, 0, 0, 128, 100, 110, 120, 200];
    over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(&dst[0..4], &[127, 127, 127, 255]);
    assert_eq!(&dst[4..8], &[100, 110, 120, 200]);
}

#[test]
fn flatten_opaque_pixels_pass_through() {
    let premul = [10u8, 200, 77, 255, 0, 0, 0, 255];
    let rgb = flatten_to_rgb8(&premul).unwrap();
    assert_eq!(rgb, vec![10, 200, 77, 0, 0, 0]);
}

#[test]
fn flatten_unpremultiplies_partial_alpha() {
    let premul = [50u8, 100, 0, 128];
    let rgb = flatten_to_rgb8(&premul).unwrap();
    assert_eq!(rgb, vec![100, 199, 0]);
}

#[test]
fn flatten_zero_alpha_is_black() {
    let premul = [0u8, 0, 0, 0];
    assert_eq!(flatten_to_rgb8(&premul).unwrap(), vec![0, 0, 0]);
}

#[test]
fn flatten_rejects_ragged_buffer() {
    assert!(flatten_to_rgb8(&[0u8; 7]).is_err());
}
