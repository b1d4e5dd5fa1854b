use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Density;

/// A decoded source image together with its filename-derived density.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: RgbaImage,
    pub density: Density,
}

impl SourceImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// True when the file opens and its content looks like a known image format.
pub fn is_image(path: &Path) -> bool {
    ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map(|r| r.format().is_some())
        .unwrap_or(false)
}

/// Open and decode an image to RGBA8, deriving the density from the
/// `@2x.` filename marker.
pub fn open(path: &Path) -> Result<SourceImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Err(Error::NotAnImage {
            path: path.to_path_buf(),
        });
    }
    let pixels = reader.decode()?.to_rgba8();
    let density = Density::from_path(path);
    debug!(
        "loaded {:?}: {}x{} ({})",
        path,
        pixels.width(),
        pixels.height(),
        density
    );
    Ok(SourceImage { pixels, density })
}
