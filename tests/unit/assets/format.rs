use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

fn rgb(width: u32, height: u32) -> image::DynamicImage {
    image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([200, 40, 40]),
    ))
}

#[test]
fn is_png_checks_full_signature() {
    assert!(is_png(&PNG_SIGNATURE));
    assert!(is_png(b"\x89PNG\r\n\x1a\nrest"));
    assert!(!is_png(b"\x89PNG\r\n\x1a"));
    assert!(!is_png(b""));
    assert!(!is_png(b"\xff\xd8\xff\xe0\x00\x10JFIF"));
}

#[test]
fn png_input_is_borrowed_unchanged() {
    let png = encode(rgb(4, 3), image::ImageFormat::Png);
    let out = normalize_to_png(&png).unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out.as_ref(), png.as_slice());
}

#[test]
fn jpeg_input_is_reencoded_as_png() {
    let jpeg = encode(rgb(8, 5), image::ImageFormat::Jpeg);
    let out = normalize_to_png(&jpeg).unwrap();
    assert!(matches!(out, Cow::Owned(_)));
    assert!(is_png(&out));

    let decoded = image::load_from_memory(&out).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 5));
}

#[test]
fn other_formats_are_unsupported() {
    let gif = b"GIF89a\x02\x00\x02\x00\x00\x00\x00;";
    assert!(matches!(
        normalize_to_png(gif),
        Err(AvatarError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        normalize_to_png(b"garbage"),
        Err(AvatarError::UnsupportedFormat(_))
    ));
}

#[test]
fn file_extension_follows_last_segment() {
    assert_eq!(file_extension("me.PNG"), Some("PNG"));
    assert_eq!(file_extension("archive.tar.jpeg"), Some("jpeg"));
    assert_eq!(file_extension(".png"), Some("png"));
    assert_eq!(file_extension("dir.png/photo"), None);
    assert_eq!(file_extension("C:\\pics\\me.jpg"), Some("jpg"));
    assert_eq!(file_extension("png"), None);
}

#[test]
fn upload_names_are_checked_case_insensitively() {
    for ok in ["a.png", "a.PNG", "b.jpg", "c.JpEg"] {
        check_upload_name(ok).unwrap();
    }
    for bad in ["a.gif", "a.webp", "noext", "a.png.exe", ""] {
        assert!(matches!(
            check_upload_name(bad),
            Err(AvatarError::UploadRejected(_))
        ));
    }
}
