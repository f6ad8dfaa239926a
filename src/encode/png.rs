use std::io::Cursor;

use crate::{
    assets::PreparedImage,
    foundation::error::{AvatarError, AvatarResult},
};

/// Encode a premultiplied image as a straight-alpha RGBA8 PNG.
pub fn encode_png(img: &PreparedImage) -> AvatarResult<Vec<u8>> {
    let mut straight = img.rgba8_premul.clone();
    unpremultiply_rgba8_in_place(&mut straight);

    let rgba = image::RgbaImage::from_raw(img.width, img.height, straight).ok_or_else(|| {
        AvatarError::encode(format!(
            "pixel buffer does not match {}x{}",
            img.width, img.height
        ))
    })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| AvatarError::encode(e.to_string()))?;
    Ok(buf)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
