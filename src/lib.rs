#![doc = r#"
capimg — cap-inset (9-patch) detection and generation for UI image assets.

This crate finds the stretchable regions of a bitmap (maximal runs of
pixel-identical adjacent rows and columns), suggests cap insets from
them, and slices the image into a minimal resizable asset where the
middle bands collapse to a single stretch pixel (two for retina). It
powers the capimg CLI and can be embedded in your own Rust applications.

Quick start: detect and compose in memory
-----------------------------------------
```rust
use image::{Rgba, RgbaImage};
use capimg::{CapInsets, Density, compose, detect_insets};

let source = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));

let detection = detect_insets(&source, Density::Standard);
assert_eq!(detection.insets, CapInsets::new(0, 0, 0, 0));

let asset = compose(&source, detection.insets, Density::Standard);
assert_eq!(asset.dimensions(), (1, 1));
```

Process files on disk
---------------------
```rust,no_run
use std::path::Path;
use capimg::{GenParams, detect_path, generate_to_path};

fn main() -> capimg::Result<()> {
    let detection = detect_path(Path::new("assets/button@2x.png"))?;
    println!("suggested insets: {}", detection.insets);

    let params = GenParams {
        insets: Some(detection.insets),
        target_dir: "out".into(),
    };
    let asset = generate_to_path(Path::new("assets/button@2x.png"), &params)?;
    println!("wrote {:?}", asset.output);
    Ok(())
}
```

Retina (`@2x`) assets
---------------------
Density is derived from the literal `@2x.` filename marker. Detection
reports insets in logical units (ceil-halved); composition scales them
back up and widens the stretch band to two pixels.

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. invalid images or out-of-bounds insets.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the detector, composer, and generation parameters.
- [`types`] — `CapInsets`, `Interval`, `Density`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::GenParams;
pub use error::{Error, Result};
pub use types::{CapInsets, Density, Interval, RETINA_MARKER};

// Core functions
pub use core::compose::compose;
pub use core::detect::{Detection, detect_insets};

// I/O helpers
pub use io::SourceImage;
pub use io::reader::{is_image, open as open_image};
pub use io::writer::output_name;

// High-level API re-exports
pub use api::{GeneratedAsset, detect_path, generate_to_buffer, generate_to_path};
