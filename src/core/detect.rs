use image::RgbaImage;
use serde::Serialize;

use crate::types::{CapInsets, Density, Interval};

/// Result of scanning an image for stretchable regions.
///
/// Intervals are half-open index runs over rows (top to bottom) and
/// columns (left to right). `insets` is in logical units: for retina
/// sources the pixel values are ceil-halved.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub width: u32,
    pub height: u32,
    pub row_intervals: Vec<Interval>,
    pub max_row_interval: Interval,
    pub col_intervals: Vec<Interval>,
    pub max_col_interval: Interval,
    pub insets: CapInsets,
}

/// Scan `image` for maximal runs of pixel-identical adjacent rows and
/// columns and derive the suggested cap insets.
///
/// An image with no repeated adjacent lines yields empty interval lists,
/// a zero-length max interval at the origin, and degenerate insets of
/// `(0, 0, height-1, width-1)`; callers must tolerate those.
pub fn detect_insets(image: &RgbaImage, density: Density) -> Detection {
    let (width, height) = image.dimensions();

    let (row_intervals, max_row_interval) = repeated_runs(height, |a, b| rows_equal(image, a, b));
    let (col_intervals, max_col_interval) = repeated_runs(width, |a, b| cols_equal(image, a, b));

    let mut insets = CapInsets::new(
        max_row_interval.start,
        max_col_interval.start,
        height.saturating_sub(1).saturating_sub(max_row_interval.last()),
        width.saturating_sub(1).saturating_sub(max_col_interval.last()),
    );
    if density == Density::Retina {
        insets = insets.halved_up();
    }

    Detection {
        width,
        height,
        row_intervals,
        max_row_interval,
        col_intervals,
        max_col_interval,
        insets,
    }
}

/// Collect maximal runs of indices whose adjacent lines compare equal,
/// together with the longest run (ties keep the earliest-found).
fn repeated_runs(len: u32, line_eq: impl Fn(u32, u32) -> bool) -> (Vec<Interval>, Interval) {
    let mut intervals: Vec<Interval> = Vec::new();
    let mut max = Interval::default();

    for i in 0..len.saturating_sub(1) {
        if !line_eq(i, i + 1) {
            continue;
        }
        let current = match intervals.last_mut() {
            // The open run ends right where this pair starts: extend it.
            Some(open) if open.end == i + 1 => {
                open.end = i + 2;
                *open
            }
            _ => {
                let run = Interval::new(i, i + 2);
                intervals.push(run);
                run
            }
        };
        if current.span() > max.span() {
            max = current;
        }
    }

    (intervals, max)
}

fn rows_equal(image: &RgbaImage, a: u32, b: u32) -> bool {
    let stride = image.width() as usize * 4;
    let raw = image.as_raw();
    let (a, b) = (a as usize * stride, b as usize * stride);
    raw[a..a + stride] == raw[b..b + stride]
}

fn cols_equal(image: &RgbaImage, a: u32, b: u32) -> bool {
    (0..image.height()).all(|y| image.get_pixel(a, y) == image.get_pixel(b, y))
}
