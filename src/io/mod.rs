//! Image file input/output: loading sources and writing generated assets.
pub mod reader;
pub mod writer;

pub use reader::SourceImage;
