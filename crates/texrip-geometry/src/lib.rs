#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// 2-dimensional points in source image pixel space.
pub mod point;

/// quadrilateral regions and their queries.
pub mod quad;

pub use crate::error::GeometryError;
pub use crate::point::Point2D;
pub use crate::quad::{NearestPoint, Quad, QuadExtent};
