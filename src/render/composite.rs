use crate::{
    assets::PreparedImage,
    foundation::{
        core::Dimensions,
        error::{AvatarError, AvatarResult},
    },
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over of `src` onto `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// [`over`] applied pixel-wise across two equal-length RGBA8 rows or buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AvatarResult<()> {
    if dst.len() != src.len() || dst.len() % 4 != 0 {
        return Err(AvatarError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Draw `src` over `dst` with its top-left corner at the origin.
///
/// Whatever part of `src` falls outside `dst` is clipped; `dst` pixels not covered by
/// `src` are left alone.
pub fn blit_over(dst: &mut PreparedImage, src: &PreparedImage) -> AvatarResult<()> {
    let cols = dst.width.min(src.width) as usize;
    let rows = dst.height.min(src.height) as usize;
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    let dst_stride = dst.width as usize * 4;
    let src_stride = src.width as usize * 4;
    let row_len = cols * 4;
    for (d_row, s_row) in dst
        .rgba8_premul
        .chunks_exact_mut(dst_stride)
        .zip(src.rgba8_premul.chunks_exact(src_stride))
        .take(rows)
    {
        over_in_place(&mut d_row[..row_len], &s_row[..row_len])?;
    }
    Ok(())
}

/// Composite `background` then `foreground` onto a fresh transparent canvas.
#[tracing::instrument(skip_all, fields(canvas = %canvas))]
pub fn compose(
    background: &PreparedImage,
    foreground: &PreparedImage,
    canvas: Dimensions,
) -> AvatarResult<PreparedImage> {
    let mut out = PreparedImage::transparent(canvas);
    blit_over(&mut out, background)?;
    blit_over(&mut out, foreground)?;
    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
