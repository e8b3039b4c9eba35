#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// raster buffer representation for texture extraction purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, RgbaImage};
