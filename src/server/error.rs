use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    encode::response::{ErrorEnvelope, OutputMode},
    foundation::error::{AvatarError, ImageRole},
};

/// Where the background of a request comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Bundled `demo.png`.
    Demo,
    /// Multipart `file` field.
    Upload,
}

/// Failure returned to the client as `400 {"code", "msg"}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// Stage-identifying code.
    pub code: i32,
    /// Message shown to the client.
    pub msg: String,
}

impl ApiError {
    /// Failure while obtaining the PNG background for a request.
    pub fn input(source: InputSource, mode: OutputMode, err: &AvatarError) -> Self {
        let code = match (source, mode) {
            (InputSource::Demo, OutputMode::Base64) => 10031,
            (InputSource::Demo, OutputMode::Binary) => 10041,
            (InputSource::Upload, OutputMode::Base64) => 10051,
            (InputSource::Upload, OutputMode::Binary) => 10061,
        };
        tracing::warn!(code, ?source, error = %err, "avatar input rejected");
        Self {
            code,
            msg: err.to_string(),
        }
    }

    /// Failure inside the resize/composite/encode pipeline.
    pub fn render(err: &AvatarError) -> Self {
        let code = render_error_code(err);
        tracing::error!(code, error = %err, "avatar render failed");
        Self {
            code,
            msg: err.to_string(),
        }
    }
}

/// Code reported for a pipeline failure.
pub fn render_error_code(err: &AvatarError) -> i32 {
    match err {
        AvatarError::DecodeFailure {
            role: ImageRole::Background,
            ..
        } => 10011,
        AvatarError::AssetMissing { .. } => 10021,
        AvatarError::DecodeFailure {
            role: ImageRole::Foreground,
            ..
        } => 10022,
        AvatarError::EncodeFailure(_) => 10032,
        _ => 10013,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            code: self.code,
            msg: self.msg,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/error.rs"]
mod tests;
