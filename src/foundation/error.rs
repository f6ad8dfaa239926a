use std::path::PathBuf;

/// Convenience result type used across the avatar pipeline.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Which image a decode failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    /// User upload or bundled demo photo drawn underneath.
    Background,
    /// Bundled hat overlay drawn on top.
    Foreground,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Background => f.write_str("background"),
            Self::Foreground => f.write_str("foreground"),
        }
    }
}

/// Error taxonomy for every stage of avatar generation.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Missing upload field or a file extension outside png/jpg/jpeg.
    #[error("upload rejected: {0}")]
    UploadRejected(String),

    /// Input is neither PNG nor decodable JPEG.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// PNG decode failed, or decoded pixels are unusable.
    #[error("{role} decode failure: {msg}")]
    DecodeFailure {
        /// Image that failed to decode.
        role: ImageRole,
        /// Decoder message.
        msg: String,
    },

    /// Bundled asset could not be found or read.
    #[error("asset missing '{}': {msg}", .path.display())]
    AssetMissing {
        /// Absolute or working-directory-relative asset path.
        path: PathBuf,
        /// Underlying IO message.
        msg: String,
    },

    /// Writing the final PNG failed.
    #[error("encode failure: {0}")]
    EncodeFailure(String),

    /// Internally inconsistent input, such as zero-sized dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from the runtime or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::UploadRejected`] value.
    pub fn upload_rejected(msg: impl Into<String>) -> Self {
        Self::UploadRejected(msg.into())
    }

    /// Build an [`AvatarError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build an [`AvatarError::DecodeFailure`] value.
    pub fn decode(role: ImageRole, msg: impl Into<String>) -> Self {
        Self::DecodeFailure {
            role,
            msg: msg.into(),
        }
    }

    /// Build an [`AvatarError::AssetMissing`] value.
    pub fn asset_missing(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::AssetMissing {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Build an [`AvatarError::EncodeFailure`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::EncodeFailure(msg.into())
    }

    /// Build an [`AvatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
