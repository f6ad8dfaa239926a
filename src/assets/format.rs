use std::{borrow::Cow, io::Cursor};

use crate::foundation::error::{AvatarError, AvatarResult};

/// 8-byte signature every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Return `true` when `bytes` starts with the PNG signature.
///
/// Input shorter than the signature is never PNG.
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.len() >= PNG_SIGNATURE.len() && bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Bring an uploaded or bundled image into PNG form.
///
/// PNG input is returned borrowed and untouched. Everything else must decode as JPEG
/// and is re-encoded as PNG.
pub fn normalize_to_png(bytes: &[u8]) -> AvatarResult<Cow<'_, [u8]>> {
    if is_png(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }

    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
        .map_err(|e| AvatarError::unsupported_format(format!("not a PNG or JPEG image: {e}")))?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| AvatarError::encode(format!("re-encode JPEG as PNG: {e}")))?;
    tracing::debug!(
        jpeg_bytes = bytes.len(),
        png_bytes = buf.len(),
        "normalized JPEG input to PNG"
    );
    Ok(Cow::Owned(buf))
}

/// Upload file extensions accepted by the service, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Extension of the last path segment of `file_name`, without the dot.
///
/// A leading dot counts, so `.png` has extension `png`; a name without a dot has none.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    base.rsplit_once('.').map(|(_, ext)| ext)
}

/// Reject upload names whose extension is not in [`ALLOWED_EXTENSIONS`].
///
/// Runs before any byte of the upload is decoded.
pub fn check_upload_name(file_name: &str) -> AvatarResult<()> {
    let allowed = file_extension(file_name).is_some_and(|ext| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    });
    if !allowed {
        return Err(AvatarError::upload_rejected(format!(
            "file type of '{file_name}' is not supported, only PNG/JPG images are accepted"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/format.rs"]
mod tests;
