use std::ops;

use crate::error::GeometryError;
use crate::point::Point2D;

/// The corner of a quad closest to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPoint {
    /// Index of the closest corner in `[0, 4)`.
    pub index: usize,
    /// Distance from the query point to that corner, in pixels.
    pub distance: f64,
}

/// Target dimensions derived from the edge lengths of a quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadExtent {
    /// Width in pixels, before rounding.
    pub width: f64,
    /// Height in pixels, before rounding.
    pub height: f64,
}

/// A quadrilateral region of the source image.
///
/// Corners are ordered `[top-left, top-right, bottom-right, bottom-left]` by
/// caller convention; the winding is neither re-ordered nor validated here.
/// Arity is enforced by the type.
///
/// # Examples
///
/// ```
/// use texrip_geometry::{Point2D, Quad};
///
/// let quad = Quad::new([
///     Point2D::new(0.0, 0.0),
///     Point2D::new(10.0, 0.0),
///     Point2D::new(10.0, 10.0),
///     Point2D::new(0.0, 10.0),
/// ]);
///
/// assert!(quad.contains(5.0, 5.0));
/// assert!(!quad.contains(15.0, 5.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad(pub [Point2D; 4]);

/// helper to deference the inner corner array
impl ops::Deref for Quad {
    type Target = [Point2D; 4];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// helper to deference the inner corner array
impl ops::DerefMut for Quad {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&[Point2D]> for Quad {
    type Error = GeometryError;

    fn try_from(points: &[Point2D]) -> Result<Self, Self::Error> {
        let corners: [Point2D; 4] = points
            .try_into()
            .map_err(|_| GeometryError::InvalidArity(points.len()))?;
        Ok(Self(corners))
    }
}

impl Quad {
    /// Create a quad from its four corners.
    pub fn new(corners: [Point2D; 4]) -> Self {
        Self(corners)
    }

    /// Create a quad from a point slice.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArity`] if the slice does not hold
    /// exactly 4 points.
    pub fn from_points(points: &[Point2D]) -> Result<Self, GeometryError> {
        points.try_into()
    }

    /// The axis-aligned rectangle `[(0,0), (w,0), (w,h), (0,h)]`.
    ///
    /// This is the target shape perspective extraction maps a quad onto.
    pub fn axis_aligned(width: f64, height: f64) -> Self {
        Self([
            Point2D::new(0.0, 0.0),
            Point2D::new(width, 0.0),
            Point2D::new(width, height),
            Point2D::new(0.0, height),
        ])
    }

    /// The four corners.
    pub fn points(&self) -> &[Point2D; 4] {
        &self.0
    }

    /// Find the corner closest to `(x, y)`.
    ///
    /// Ties keep the lowest index. The caller owns any pixel threshold used
    /// to decide whether the corner counts as "hit".
    ///
    /// # Examples
    ///
    /// ```
    /// use texrip_geometry::{Point2D, Quad};
    ///
    /// let quad = Quad::axis_aligned(10.0, 10.0);
    /// let nearest = quad.nearest_point(9.0, 8.0);
    ///
    /// assert_eq!(nearest.index, 2);
    /// ```
    pub fn nearest_point(&self, x: f64, y: f64) -> NearestPoint {
        let query = Point2D::new(x, y);
        let mut nearest = NearestPoint {
            index: 0,
            distance: f64::INFINITY,
        };
        for (index, corner) in self.0.iter().enumerate() {
            let distance = query.distance(corner);
            if distance < nearest.distance {
                nearest = NearestPoint { index, distance };
            }
        }
        nearest
    }

    /// Even-odd ray-casting point-in-polygon test over the quad.
    ///
    /// The half-open comparison `(yi > y) != (yj > y)` gives the standard
    /// treatment of horizontal edges and shared vertices.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let mut inside = false;
        let mut j = self.0.len() - 1;
        for i in 0..self.0.len() {
            let (xi, yi) = (self.0[i].x, self.0[i].y);
            let (xj, yj) = (self.0[j].x, self.0[j].y);
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Output dimensions for extraction, from the edge lengths.
    ///
    /// Width is the longer of the two "horizontal" edges (p0-p1, p3-p2),
    /// height the longer of the two "vertical" edges (p1-p2, p0-p3). Taking
    /// the max rather than the average keeps the resolution of the largest
    /// visible edge, so the shorter edge is upsampled instead of the longer
    /// one losing detail.
    pub fn extent(&self) -> QuadExtent {
        let [p0, p1, p2, p3] = &self.0;
        QuadExtent {
            width: p0.distance(p1).max(p3.distance(p2)),
            height: p1.distance(p2).max(p0.distance(p3)),
        }
    }

    /// Translate all four corners by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for corner in self.0.iter_mut() {
            corner.x += dx;
            corner.y += dy;
        }
    }
}
