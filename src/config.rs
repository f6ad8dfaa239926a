use std::path::PathBuf;

use crate::assets::store::DEFAULT_IMAGES_DIR;

/// Environment variable selecting the bind address.
pub const HOST_ENV_VAR: &str = "HOST";
/// Bind address used when neither `HOST` nor `--host` is given.
pub const DEFAULT_HOST: &str = ":8089";
/// Largest accepted request body, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 << 20;

/// `Content-Type` sent with binary avatar responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinaryContentType {
    /// `image/jpeg`, kept for clients written against the existing service even
    /// though the body is PNG.
    #[default]
    Jpeg,
    /// `image/png`, matching the actual body.
    Png,
}

impl BinaryContentType {
    /// Header value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Runtime settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address, either `host:port` or Go-style `:port`.
    pub host: String,
    /// Directory holding `hat.png` and `demo.png`.
    pub images_dir: PathBuf,
    /// Header value for binary responses.
    pub binary_content_type: BinaryContentType,
    /// Request body limit for uploads.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            binary_content_type: BinaryContentType::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Address suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        bind_addr(&self.host)
    }
}

/// Expand a bare `:port` into an all-interfaces address; anything else is used as-is.
pub fn bind_addr(host: &str) -> String {
    let host = host.trim();
    if host.starts_with(':') {
        format!("0.0.0.0{host}")
    } else {
        host.to_string()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
