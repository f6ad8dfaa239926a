pub(crate) mod decode;
pub(crate) mod format;
pub(crate) mod store;

use crate::foundation::core::Dimensions;

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    /// Fully transparent image of the given size.
    pub fn transparent(dims: Dimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            rgba8_premul: vec![0; dims.rgba8_len()],
        }
    }

    /// Pixel dimensions of this image.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}
