use super::*;

fn solid(width: u32, height: u32, px: PremulRgba8) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: px.repeat((width * height) as usize),
    }
}

fn pixel(img: &PreparedImage, x: u32, y: u32) -> PremulRgba8 {
    let i = ((y * img.width + x) * 4) as usize;
    [
        img.rgba8_premul[i],
        img.rgba8_premul[i + 1],
        img.rgba8_premul[i + 2],
        img.rgba8_premul[i + 3],
    ]
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_mixes() {
    let dst = [0, 0, 200, 255];
    let src = [128, 0, 0, 128];
    // inv = 127: blue keeps 200 * 127 / 255 ~= 100.
    assert_eq!(over(dst, src), [128, 0, 100, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = [0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn blit_clips_larger_source() {
    let mut dst = solid(2, 2, [0, 0, 0, 0]);
    let src = solid(3, 3, [9, 9, 9, 255]);
    blit_over(&mut dst, &src).unwrap();
    assert_eq!(dst, solid(2, 2, [9, 9, 9, 255]));
}

#[test]
fn blit_leaves_uncovered_pixels() {
    let mut dst = solid(3, 2, [1, 1, 1, 1]);
    let src = solid(2, 1, [50, 60, 70, 255]);
    blit_over(&mut dst, &src).unwrap();
    assert_eq!(pixel(&dst, 0, 0), [50, 60, 70, 255]);
    assert_eq!(pixel(&dst, 1, 0), [50, 60, 70, 255]);
    assert_eq!(pixel(&dst, 2, 0), [1, 1, 1, 1]);
    assert_eq!(pixel(&dst, 0, 1), [1, 1, 1, 1]);
}

#[test]
fn compose_stacks_foreground_over_background() {
    let canvas = Dimensions::new(4, 4).unwrap();
    let background = solid(4, 2, [0, 0, 255, 255]);

    // Opaque red in the top-left quadrant, transparent elsewhere.
    let mut foreground = solid(4, 4, [0, 0, 0, 0]);
    for y in 0..2 {
        for x in 0..2 {
            let i = ((y * 4 + x) * 4) as usize;
            foreground.rgba8_premul[i..i + 4].copy_from_slice(&[255, 0, 0, 255]);
        }
    }

    let out = compose(&background, &foreground, canvas).unwrap();
    assert_eq!(out.dimensions(), canvas);
    assert_eq!(pixel(&out, 0, 0), [255, 0, 0, 255]);
    assert_eq!(pixel(&out, 3, 1), [0, 0, 255, 255]);
    assert_eq!(pixel(&out, 3, 3), [0, 0, 0, 0]);
}
