//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image-decoding errors, and provides semantic
//! variants for inset validation failures.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CapInsets;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("'{path}' is not a valid image")]
    NotAnImage { path: PathBuf },

    #[error("cap insets {insets} do not fit a {width}x{height} image")]
    InsetsOutOfBounds {
        insets: CapInsets,
        width: u32,
        height: u32,
    },
}
