/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Error when a point list does not form a quadrilateral.
    #[error("Expected exactly 4 points, got {0}")]
    InvalidArity(usize),
}
