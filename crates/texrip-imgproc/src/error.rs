use texrip_image::ImageError;

/// An error type for image processing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImgprocError {
    /// Error when the source quad has collinear or coincident corners, for
    /// which no perspective mapping exists.
    #[error("Source quad is degenerate (collinear or coincident corners)")]
    DegenerateQuad,

    /// Error when the target extent rounds to zero pixels in either axis.
    #[error("Target extent {0}x{1} is empty")]
    EmptyExtent(usize, usize),

    /// Error from the underlying image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}
