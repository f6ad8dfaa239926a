use base64::Engine as _;

/// Prefix turning base64 PNG data into a data URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// How a finished avatar is returned to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON envelope carrying a base64 data URI.
    Base64,
    /// Raw image body.
    Binary,
}

/// Success body for [`OutputMode::Base64`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Base64Envelope {
    /// Always `0`.
    pub code: i32,
    /// `data:image/png;base64,...` URI of the avatar.
    pub base64: String,
}

/// Failure body for every endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorEnvelope {
    /// Stage-identifying error code.
    pub code: i32,
    /// Human-readable message.
    pub msg: String,
}

impl Base64Envelope {
    /// Wrap encoded PNG bytes.
    pub fn from_png(png: &[u8]) -> Self {
        Self {
            code: 0,
            base64: png_data_uri(png),
        }
    }
}

/// Standard-alphabet base64 data URI for PNG bytes.
pub fn png_data_uri(png: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    let mut out = String::with_capacity(PNG_DATA_URI_PREFIX.len() + encoded.len());
    out.push_str(PNG_DATA_URI_PREFIX);
    out.push_str(&encoded);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/response.rs"]
mod tests;
