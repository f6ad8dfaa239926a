//! Hat avatar generator.
//!
//! Turns a photo into a 300×300 avatar with a fixed overlay drawn on top, and serves
//! that over HTTP.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: PNG passes through, JPEG is re-encoded as PNG ([`normalize_to_png`])
//! 2. **Fit**: the background is Lanczos-resized to fit inside the canvas ([`fit_within`])
//! 3. **Composite**: background then overlay, source-over, onto a transparent canvas ([`compose`])
//! 4. **Encode**: PNG bytes, returned raw or as a base64 data URI ([`Base64Envelope`])
//!
//! [`generate_avatar`] runs steps 2–4; [`server::router`] wires the whole thing to axum.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod render;

/// Runtime configuration for the HTTP server.
pub mod config;
/// axum routes, upload handling and request logging.
pub mod server;

pub use assets::PreparedImage;
pub use assets::decode::{decode_png, decode_prepared, prepare};
pub use assets::format::{
    ALLOWED_EXTENSIONS, PNG_SIGNATURE, check_upload_name, file_extension, is_png,
    normalize_to_png,
};
pub use assets::store::{
    AssetProblem, AssetStore, DEFAULT_IMAGES_DIR, DEMO_IMAGE_NAME, FOREGROUND_IMAGE_NAME,
};
pub use encode::png::encode_png;
pub use encode::response::{
    Base64Envelope, ErrorEnvelope, OutputMode, PNG_DATA_URI_PREFIX, png_data_uri,
};
pub use foundation::core::{CANVAS, CANVAS_SIZE, Dimensions};
pub use foundation::error::{AvatarError, AvatarResult, ImageRole};
pub use render::composite::{PremulRgba8, blit_over, compose, over, over_in_place};
pub use render::pipeline::generate_avatar;
pub use render::resize::{fit_within, resize_to_fit};
