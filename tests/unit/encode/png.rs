use super::*;
use crate::foundation::core::Dimensions;

#[test]
fn encodes_canvas_sized_png() {
    let img = PreparedImage::transparent(Dimensions::new(300, 300).unwrap());
    let png = encode_png(&img).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (300, 300));
}

#[test]
fn unpremultiplies_on_encode() {
    // Straight (200, 100, 0, 128) premultiplied.
    let img = PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: vec![100, 50, 0, 128],
    };
    let png = encode_png(&img).unwrap();
    let px = *image::load_from_memory(&png)
        .unwrap()
        .to_rgba8()
        .get_pixel(0, 0);
    assert_eq!(px, image::Rgba([199, 100, 0, 128]));
}

#[test]
fn mismatched_buffer_is_encode_failure() {
    let img = PreparedImage {
        width: 2,
        height: 2,
        rgba8_premul: vec![0; 4],
    };
    assert!(matches!(
        encode_png(&img),
        Err(AvatarError::EncodeFailure(_))
    ));
}
