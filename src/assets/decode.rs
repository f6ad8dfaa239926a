use crate::{
    assets::PreparedImage,
    foundation::core::Dimensions,
    foundation::error::{AvatarError, AvatarResult, ImageRole},
};

/// Decode a PNG stream into straight-alpha RGBA8.
pub fn decode_png(bytes: &[u8], role: ImageRole) -> AvatarResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| AvatarError::decode(role, e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Dimensions::new(width, height).map_err(|e| AvatarError::decode(role, e.to_string()))?;
    Ok(rgba)
}

/// Convert straight-alpha RGBA8 into a [`PreparedImage`].
pub fn prepare(rgba: image::RgbaImage) -> PreparedImage {
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    PreparedImage {
        width,
        height,
        rgba8_premul,
    }
}

/// Decode a PNG stream straight into a [`PreparedImage`].
pub fn decode_prepared(bytes: &[u8], role: ImageRole) -> AvatarResult<PreparedImage> {
    decode_png(bytes, role).map(prepare)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
