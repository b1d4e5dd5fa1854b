use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;
use crate::types::{CapInsets, Density, RETINA_MARKER};

/// Output filename for a generated asset:
/// `<base>-<top>-<left>-<bottom>-<right>[@2x].<ext>`.
///
/// The insets are the logical values used for generation, so the name
/// round-trips into `-c top left bottom right`.
pub fn output_name(source: &Path, insets: CapInsets, density: Density) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sep = match density {
        Density::Retina => RETINA_MARKER,
        Density::Standard => ".",
    };
    let caps = format!(
        "{}-{}-{}-{}",
        insets.top, insets.left, insets.bottom, insets.right
    );
    match name.rsplit_once(sep) {
        Some((base, ext)) => format!("{base}-{caps}{sep}{ext}"),
        None => format!("{name}-{caps}"),
    }
}

/// Save a composed image into `target_dir` under the generated name.
/// The encoder is chosen from the extension, which the naming scheme
/// preserves from the source.
pub fn write(
    image: &RgbaImage,
    source: &Path,
    insets: CapInsets,
    density: Density,
    target_dir: &Path,
) -> Result<PathBuf> {
    let path = target_dir.join(output_name(source, insets, density));
    image.save(&path)?;
    debug!("wrote {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_name_splits_on_last_dot() {
        assert_eq!(
            output_name(
                Path::new("/assets/btn.round.png"),
                CapInsets::new(1, 2, 3, 4),
                Density::Standard
            ),
            "btn.round-1-2-3-4.png"
        );
    }

    #[test]
    fn retina_name_keeps_the_marker() {
        assert_eq!(
            output_name(
                Path::new("btn@2x.png"),
                CapInsets::new(0, 0, 0, 0),
                Density::Retina
            ),
            "btn-0-0-0-0@2x.png"
        );
    }

    #[test]
    fn extensionless_name_appends_insets() {
        assert_eq!(
            output_name(Path::new("btn"), CapInsets::new(1, 1, 1, 1), Density::Standard),
            "btn-1-1-1-1"
        );
    }
}
