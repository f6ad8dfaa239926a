use image::{RgbaImage, imageops::FilterType};

use crate::{
    assets::PreparedImage,
    foundation::{
        core::Dimensions,
        error::{AvatarError, AvatarResult, ImageRole},
    },
};

/// Largest aspect-preserving size of `src` that fits inside `bounds`.
///
/// Sides are rounded up so truncation never under-covers the canvas, then clamped to
/// `[1, bound]` so float error cannot push a side past it.
pub fn fit_within(src: Dimensions, bounds: Dimensions) -> Dimensions {
    let ratio = (f64::from(bounds.width) / f64::from(src.width))
        .min(f64::from(bounds.height) / f64::from(src.height));

    let side = |v: u32, bound: u32| ((f64::from(v) * ratio).ceil() as u32).clamp(1, bound);
    Dimensions {
        width: side(src.width, bounds.width),
        height: side(src.height, bounds.height),
    }
}

/// Resize a premultiplied image to [`fit_within`] `bounds` with a Lanczos3 filter.
///
/// Filtering premultiplied samples keeps fully transparent pixels from bleeding their
/// colour into visible neighbours. An image already exactly `bounds` is returned untouched.
#[tracing::instrument(skip(img), fields(width = img.width, height = img.height))]
pub fn resize_to_fit(img: PreparedImage, bounds: Dimensions) -> AvatarResult<PreparedImage> {
    let src = Dimensions::new(img.width, img.height)
        .map_err(|e| AvatarError::decode(ImageRole::Background, e.to_string()))?;
    if src == bounds {
        return Ok(img);
    }

    let target = fit_within(src, bounds);
    tracing::debug!(%src, %target, "resizing background");

    let premul = RgbaImage::from_raw(img.width, img.height, img.rgba8_premul).ok_or_else(|| {
        AvatarError::validation(format!("pixel buffer does not match {src}"))
    })?;
    let resized = image::imageops::resize(
        &premul,
        target.width,
        target.height,
        FilterType::Lanczos3,
    );

    let mut rgba8_premul = resized.into_raw();
    clamp_to_alpha(&mut rgba8_premul);
    Ok(PreparedImage {
        width: target.width,
        height: target.height,
        rgba8_premul,
    })
}

/// Lanczos ringing can push a colour channel above its alpha, which is not a valid
/// premultiplied pixel.
fn clamp_to_alpha(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = (*c).min(a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/resize.rs"]
mod tests;
