//! Texture area entity for perspective texture extraction.
//!
//! A [`TextureArea`] owns the quadrilateral a user marked on a source image
//! together with its interaction state (active corner, drag in progress),
//! and exposes extraction of the perspective-corrected texture as a pure
//! function of the source buffer and the quad. The interaction state never
//! feeds into the kernel math; it exists so a pointer-driven UI has one
//! place to keep it.

use log::debug;
use texrip_geometry::{GeometryError, NearestPoint, Point2D, Quad};
use texrip_image::Image;
use texrip_imgproc::warp::extract_quad;
use texrip_imgproc::ImgprocError;
use thiserror::Error;

/// Error type for texture area operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AreaError {
    /// The supplied point list did not form a quad.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Extraction failed in the imaging kernel.
    #[error(transparent)]
    Imgproc(#[from] ImgprocError),
}

/// A user-selected quadrilateral region of a source image.
///
/// Corners follow the `[top-left, top-right, bottom-right, bottom-left]`
/// convention of [`Quad`]. The area is created once four points have been
/// collected, its corners may be dragged or the whole quad translated, and
/// extraction can be requested at any time against a source buffer.
#[derive(Debug)]
pub struct TextureArea {
    quad: Quad,
    active_point: Option<usize>,
    dragging: bool,
}

impl TextureArea {
    /// Create a texture area over the given quad.
    pub fn new(quad: Quad) -> Self {
        Self {
            quad,
            active_point: None,
            dragging: false,
        }
    }

    /// Create a texture area from a point slice.
    ///
    /// # Errors
    ///
    /// Returns an arity error unless the slice holds exactly 4 points.
    pub fn from_points(points: &[Point2D]) -> Result<Self, AreaError> {
        Ok(Self::new(Quad::from_points(points)?))
    }

    /// The quad the area currently covers.
    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    /// Whether `(x, y)` lies inside the area.
    ///
    /// Consumed by the UI's pointer layer for hit-testing; coordinates are
    /// in source image space, so any viewport conversion happens before
    /// this call.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.quad.contains(x, y)
    }

    /// The corner closest to `(x, y)` and its distance.
    ///
    /// The pixel threshold deciding whether the corner counts as grabbed
    /// belongs to the caller.
    pub fn nearest_point(&self, x: f64, y: f64) -> NearestPoint {
        self.quad.nearest_point(x, y)
    }

    /// Move one corner to `(x, y)`.
    ///
    /// A no-op when `index` is outside `[0, 4)`.
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) {
        if let Some(corner) = self.quad.get_mut(index) {
            *corner = Point2D::new(x, y);
        }
    }

    /// Translate the whole area by `(dx, dy)`.
    pub fn move_area(&mut self, dx: f64, dy: f64) {
        self.quad.translate(dx, dy);
    }

    /// The corner index currently under manipulation, if any.
    pub fn active_point(&self) -> Option<usize> {
        self.active_point
    }

    /// Mark a corner as under manipulation, or clear the mark.
    pub fn set_active_point(&mut self, index: Option<usize>) {
        self.active_point = index.filter(|&i| i < 4);
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mark the start of a drag gesture.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Mark the end of a drag gesture.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Extract the perspective-corrected texture under this area.
    ///
    /// The output size derives from the quad's edge lengths; the source
    /// buffer is only read. See [`extract_quad`] for the failure modes.
    pub fn extract_texture<T, const C: usize>(
        &self,
        src: &Image<T, C>,
    ) -> Result<Image<T, C>, AreaError>
    where
        T: Copy + Default + Send + Sync,
    {
        let extent = self.quad.extent();
        debug!(
            "extracting texture, target extent {:.1}x{:.1}",
            extent.width, extent.height
        );
        Ok(extract_quad(src, &self.quad)?)
    }

    /// Deep-copy the area for duplication.
    ///
    /// The corner list is copied; interaction state is reset, not carried
    /// over. Callers typically follow up with [`TextureArea::move_area`] to
    /// offset the copy visibly.
    pub fn duplicate(&self) -> Self {
        Self::new(self.quad)
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaError, TextureArea};
    use texrip_geometry::{GeometryError, Point2D, Quad};
    use texrip_image::{Image, ImageSize};

    fn sample_area() -> TextureArea {
        TextureArea::new(Quad::axis_aligned(10.0, 10.0))
    }

    #[test]
    fn test_from_points_arity() {
        let points = vec![Point2D::new(0.0, 0.0); 5];
        let err = TextureArea::from_points(&points).unwrap_err();
        assert_eq!(err, AreaError::Geometry(GeometryError::InvalidArity(5)));
    }

    #[test]
    fn test_move_point() {
        let mut area = sample_area();
        area.move_point(1, 12.0, -1.0);
        assert_eq!(area.quad()[1], Point2D::new(12.0, -1.0));

        // out-of-range index leaves the quad untouched
        let before = *area.quad();
        area.move_point(4, 99.0, 99.0);
        assert_eq!(*area.quad(), before);
    }

    #[test]
    fn test_move_area() {
        let mut area = sample_area();
        area.move_area(5.0, -2.0);
        assert_eq!(area.quad()[0], Point2D::new(5.0, -2.0));
        assert_eq!(area.quad()[2], Point2D::new(15.0, 8.0));
    }

    #[test]
    fn test_hit_testing_delegates() {
        let area = sample_area();
        assert!(area.contains(5.0, 5.0));
        assert!(!area.contains(15.0, 5.0));
        assert_eq!(area.nearest_point(9.0, 9.0).index, 2);
    }

    #[test]
    fn test_interaction_state() {
        let mut area = sample_area();
        assert_eq!(area.active_point(), None);
        assert!(!area.is_dragging());

        area.set_active_point(Some(3));
        area.begin_drag();
        assert_eq!(area.active_point(), Some(3));
        assert!(area.is_dragging());

        // indices outside the quad are dropped
        area.set_active_point(Some(4));
        assert_eq!(area.active_point(), None);

        area.end_drag();
        assert!(!area.is_dragging());
    }

    #[test]
    fn test_duplicate_resets_state() {
        let mut area = sample_area();
        area.set_active_point(Some(2));
        area.begin_drag();

        let copy = area.duplicate();
        assert_eq!(*copy.quad(), *area.quad());
        assert_eq!(copy.active_point(), None);
        assert!(!copy.is_dragging());
    }

    #[test]
    fn test_extract_texture() -> Result<(), AreaError> {
        let src = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 16,
                height: 16,
            },
            200u8,
        )
        .map_err(texrip_imgproc::ImgprocError::from)?;

        let area = TextureArea::new(Quad::axis_aligned(8.0, 4.0));
        let texture = area.extract_texture(&src)?;
        assert_eq!(texture.size().width, 8);
        assert_eq!(texture.size().height, 4);
        assert!(texture.as_slice().iter().all(|&v| v == 200));
        Ok(())
    }
}
