use std::path::{Path, PathBuf};

use crate::{
    assets::{PreparedImage, decode, format},
    foundation::core::{CANVAS, Dimensions},
    foundation::error::{AvatarError, AvatarResult, ImageRole},
};

/// Directory, relative to the working directory, holding the bundled images.
pub const DEFAULT_IMAGES_DIR: &str = "images";
/// File name of the hat overlay.
pub const FOREGROUND_IMAGE_NAME: &str = "hat.png";
/// File name of the demo background photo.
pub const DEMO_IMAGE_NAME: &str = "demo.png";

/// Read-only access to the two bundled images.
///
/// Nothing is cached: every call goes back to disk, so replacing an asset takes effect
/// on the next request and a missing asset only fails the requests that need it.
#[derive(Clone, Debug)]
pub struct AssetStore {
    root: PathBuf,
}

/// Problem found by [`AssetStore::check`].
#[derive(Debug)]
pub enum AssetProblem {
    /// Asset is missing or does not decode.
    Unusable(AvatarError),
    /// Overlay decodes but is not canvas-sized, so it will be clipped or leave a gap.
    ForegroundSize(Dimensions),
}

impl std::fmt::Display for AssetProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unusable(err) => write!(f, "{err}"),
            Self::ForegroundSize(dims) => write!(
                f,
                "foreground overlay is {dims}, expected {CANVAS}; it is drawn unscaled at the origin"
            ),
        }
    }
}

impl AssetStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the assets are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the hat overlay.
    pub fn foreground_path(&self) -> PathBuf {
        self.root.join(FOREGROUND_IMAGE_NAME)
    }

    /// Full path of the demo photo.
    pub fn demo_path(&self) -> PathBuf {
        self.root.join(DEMO_IMAGE_NAME)
    }

    /// Read and decode the hat overlay.
    pub fn load_foreground(&self) -> AvatarResult<PreparedImage> {
        let bytes = read_asset(&self.foreground_path())?;
        decode::decode_prepared(&bytes, ImageRole::Foreground)
    }

    /// Read the demo photo and normalize it to PNG bytes.
    pub fn load_demo(&self) -> AvatarResult<Vec<u8>> {
        let bytes = read_asset(&self.demo_path())?;
        let png = format::normalize_to_png(&bytes)?;
        Ok(png.into_owned())
    }

    /// Validate both assets once, for startup diagnostics.
    pub fn check(&self) -> Vec<AssetProblem> {
        let mut problems = Vec::new();
        match self.load_foreground() {
            Ok(fg) if fg.dimensions() != CANVAS => {
                problems.push(AssetProblem::ForegroundSize(fg.dimensions()));
            }
            Ok(_) => {}
            Err(err) => problems.push(AssetProblem::Unusable(err)),
        }
        if let Err(err) = self
            .load_demo()
            .and_then(|png| decode::decode_png(&png, ImageRole::Background).map(|_| ()))
        {
            problems.push(AssetProblem::Unusable(err));
        }
        problems
    }
}

fn read_asset(path: &Path) -> AvatarResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| AvatarError::asset_missing(path, e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
