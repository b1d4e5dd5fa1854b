//! High-level, ergonomic entry points.
//!
//! These wrap the core detector/composer with file I/O for the common
//! "one path in, one asset out" flows the CLI uses. For in-memory work,
//! call [`detect_insets`](crate::core::detect::detect_insets) and
//! [`compose`](crate::core::compose::compose) directly.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::compose::compose;
use crate::core::detect::{Detection, detect_insets};
use crate::core::params::GenParams;
use crate::error::Result;
use crate::io::{reader, writer};
use crate::types::{CapInsets, Density};

/// A generated asset: where it was written and with which geometry.
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    /// Logical insets used for the slice
    pub insets: CapInsets,
    pub density: Density,
    pub output: PathBuf,
}

/// Detect stretchable regions of the image at `path`.
///
/// Density is derived from the `@2x.` filename marker; detected insets
/// are reported in logical units.
pub fn detect_path(path: &Path) -> Result<Detection> {
    let source = reader::open(path)?;
    Ok(detect_insets(&source.pixels, source.density))
}

/// Generate the minimal stretchable asset for the image at `path`.
///
/// Insets come from `params`, falling back to detection when omitted,
/// and are validated against the source dimensions before composing.
/// The output lands in `params.target_dir` under the
/// `<base>-<top>-<left>-<bottom>-<right>[@2x].<ext>` naming scheme.
pub fn generate_to_path(path: &Path, params: &GenParams) -> Result<GeneratedAsset> {
    let source = reader::open(path)?;
    let insets = match params.insets {
        Some(insets) => insets,
        None => detect_insets(&source.pixels, source.density).insets,
    };

    let (width, height) = source.dimensions();
    insets.validate(width, height, source.density)?;

    let composed = compose(&source.pixels, insets, source.density);
    let output = writer::write(&composed, path, insets, source.density, &params.target_dir)?;
    info!("generated {:?} with insets {}", output, insets);

    Ok(GeneratedAsset {
        insets,
        density: source.density,
        output,
    })
}

/// Generate in memory, without touching the filesystem for output.
/// Insets are validated, then the composed image is returned.
pub fn generate_to_buffer(
    source: &RgbaImage,
    insets: CapInsets,
    density: Density,
) -> Result<RgbaImage> {
    let (width, height) = source.dimensions();
    insets.validate(width, height, density)?;
    Ok(compose(source, insets, density))
}
