use axum::{
    body::Bytes,
    extract::{Multipart, multipart::MultipartRejection},
};

use crate::{
    assets::format::check_upload_name,
    foundation::error::{AvatarError, AvatarResult},
};

/// Multipart field carrying the photo.
pub const UPLOAD_FIELD: &str = "file";

/// Photo received from a multipart form.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub file_name: String,
    /// Raw file contents, not yet validated.
    pub bytes: Bytes,
}

/// Take the first file part named [`UPLOAD_FIELD`] from the request.
///
/// The extension is checked before the body of the part is read.
pub async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> AvatarResult<UploadedFile> {
    let mut multipart =
        multipart.map_err(|e| AvatarError::upload_rejected(format!("read form: {e}")))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AvatarError::upload_rejected(format!("read form: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // Plain form values are not files.
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        check_upload_name(&file_name)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AvatarError::upload_rejected(format!("read '{file_name}': {e}")))?;
        tracing::debug!(%file_name, bytes = bytes.len(), "upload received");
        return Ok(UploadedFile { file_name, bytes });
    }

    Err(AvatarError::upload_rejected(format!(
        "missing file field '{UPLOAD_FIELD}'"
    )))
}
