use crate::{
    assets::{PreparedImage, decode, store::AssetStore},
    encode::png::encode_png,
    foundation::{
        core::CANVAS,
        error::{AvatarResult, ImageRole},
    },
    render::{composite::compose, resize::resize_to_fit},
};

/// Full avatar pipeline: fit the PNG background, load the overlay, composite, encode.
///
/// `background_png` must already be PNG (see [`crate::normalize_to_png`]). The overlay is
/// read from `assets` on every call.
#[tracing::instrument(skip_all, fields(background_bytes = background_png.len()))]
pub fn generate_avatar(background_png: &[u8], assets: &AssetStore) -> AvatarResult<Vec<u8>> {
    render_avatar(background_png, || assets.load_foreground())
}

/// The background is fitted before `load_foreground` runs, so a bad background is
/// reported ahead of a missing overlay.
pub(crate) fn render_avatar(
    background_png: &[u8],
    load_foreground: impl FnOnce() -> AvatarResult<PreparedImage>,
) -> AvatarResult<Vec<u8>> {
    let background = fit_background(background_png)?;
    let foreground = load_foreground()?;
    let canvas = compose(&background, &foreground, CANVAS)?;
    let png = encode_png(&canvas)?;
    tracing::debug!(png_bytes = png.len(), "avatar encoded");
    Ok(png)
}

fn fit_background(background_png: &[u8]) -> AvatarResult<PreparedImage> {
    let rgba = decode::decode_png(background_png, ImageRole::Background)?;
    resize_to_fit(decode::prepare(rgba), CANVAS)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
