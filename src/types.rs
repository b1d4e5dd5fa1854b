//! Shared types used across capimg.
//! Includes `CapInsets`, `Interval`, and `Density`.
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Filename marker for double-density assets.
pub const RETINA_MARKER: &str = "@2x.";

/// Border margins bounding the non-stretchable edges of a 9-patch image,
/// in logical units (multiply by [`Density::scale`] for pixels).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct CapInsets {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl CapInsets {
    pub fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets in physical pixels for the given density.
    pub fn scaled(&self, density: Density) -> CapInsets {
        let s = density.scale();
        CapInsets::new(self.top * s, self.left * s, self.bottom * s, self.right * s)
    }

    /// Ceil-halve each inset into logical units; the rounding-up inverse
    /// of the doubling applied when composing retina assets.
    pub fn halved_up(&self) -> CapInsets {
        CapInsets::new(
            self.top.div_ceil(2),
            self.left.div_ceil(2),
            self.bottom.div_ceil(2),
            self.right.div_ceil(2),
        )
    }

    /// Check that the scaled insets plus the stretch band fit inside a
    /// `width` x `height` source. Out-of-range insets would otherwise
    /// produce overlapping or empty crops.
    pub fn validate(&self, width: u32, height: u32, density: Density) -> crate::Result<()> {
        let fill = density.scale();
        let s = self.scaled(density);
        if s.left + s.right + fill > width || s.top + s.bottom + fill > height {
            return Err(crate::Error::InsetsOutOfBounds {
                insets: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for CapInsets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// Half-open run [start, end) of pixel-identical adjacent rows or columns.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Last index covered; the degenerate empty interval reports its start.
    pub fn last(&self) -> u32 {
        self.end.saturating_sub(1).max(self.start)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Pixel density of a source asset, signaled by the `@2x.` filename marker.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Density {
    Standard,
    Retina,
}

impl Density {
    /// Pixels per logical unit; also the width of the stretch band.
    pub fn scale(&self) -> u32 {
        match self {
            Density::Standard => 1,
            Density::Retina => 2,
        }
    }

    pub fn from_path(path: &Path) -> Density {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if name.contains(RETINA_MARKER) {
            Density::Retina
        } else {
            Density::Standard
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Density::Standard => write!(f, "Standard"),
            Density::Retina => write!(f, "Retina"),
        }
    }
}
