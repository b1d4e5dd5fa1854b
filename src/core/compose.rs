use image::{RgbaImage, imageops};

use crate::types::{CapInsets, Density};

/// Slice `source` into a 3x3 grid at the given insets and reassemble the
/// minimal stretchable asset: corner regions are copied verbatim, the
/// middle row/column collapse to a single stretch band (1px, 2px retina).
///
/// `insets` is in logical units and is scaled by the density, matching
/// [`detect_insets`](crate::core::detect::detect_insets) output. Callers
/// are expected to run [`CapInsets::validate`] first; oversized insets
/// produce clipped crops rather than a hard failure.
pub fn compose(source: &RgbaImage, insets: CapInsets, density: Density) -> RgbaImage {
    let fill = density.scale();
    let CapInsets {
        top,
        left,
        bottom,
        right,
    } = insets.scaled(density);
    let (width, height) = source.dimensions();

    let mut target = RgbaImage::new(left + right + fill, top + bottom + fill);

    // (source offset, extent) per grid band, left-to-right / top-to-bottom.
    let cols = [(0, left), (left, fill), (width.saturating_sub(right), right)];
    let rows = [(0, top), (top, fill), (height.saturating_sub(bottom), bottom)];
    let dst_x = [0, left, left + fill];
    let dst_y = [0, top, top + fill];

    for (gy, &(sy, h)) in rows.iter().enumerate() {
        for (gx, &(sx, w)) in cols.iter().enumerate() {
            if w == 0 || h == 0 {
                continue;
            }
            let region = imageops::crop_imm(source, sx, sy, w, h).to_image();
            imageops::replace(&mut target, &region, dst_x[gx] as i64, dst_y[gy] as i64);
        }
    }

    target
}
