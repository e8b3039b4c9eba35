use texrip_geometry::Quad;

use crate::error::ImgprocError;

/// Pivots below this magnitude mean the 8x8 system has no unique solution.
const PIVOT_EPSILON: f64 = 1e-9;

/// A planar projective transform, 9 coefficients `[a..i]` of a 3x3 matrix up
/// to scale, with `i` normalized to 1 by the solver.
///
/// A point maps as
///
/// ```text
/// x' = (a*x + b*y + c) / (g*x + h*y + i)
/// y' = (d*x + e*y + f) / (g*x + h*y + i)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomographyMatrix(pub [f64; 9]);

impl HomographyMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Apply the transform to a point.
    ///
    /// # Examples
    ///
    /// ```
    /// use texrip_imgproc::homography::HomographyMatrix;
    ///
    /// let m = HomographyMatrix([1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
    /// let (x, y) = m.transform_point(1.0, 1.0);
    ///
    /// assert_eq!(x, 0.0);
    /// assert_eq!(y, 2.0);
    /// ```
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.0;
        let w = m[6] * x + m[7] * y + m[8];
        (
            (m[0] * x + m[1] * y + m[2]) / w,
            (m[3] * x + m[4] * y + m[5]) / w,
        )
    }
}

/// Compute the homography mapping corner `i` of `src` onto corner `i` of
/// `dst`.
///
/// Uses the direct linear transform: each correspondence `(x, y) -> (u, v)`
/// contributes the two equations
///
/// ```text
/// x*a + y*b + c - u*x*g - u*y*h = u
/// x*d + y*e + f - v*x*g - v*y*h = v
/// ```
///
/// giving an 8x8 linear system for `[a..h]`, solved by Gaussian elimination
/// with partial pivoting; `i` is fixed at 1.
///
/// The same function serves both mapping directions: resampling passes the
/// target rectangle as `src` so the result maps destination pixels straight
/// into source space, instead of algebraically inverting the 3x3 matrix.
///
/// # Errors
///
/// Returns [`ImgprocError::DegenerateQuad`] when the corners are collinear
/// or coincident and the system has no unique solution.
///
/// # Examples
///
/// ```
/// use texrip_geometry::Quad;
/// use texrip_imgproc::homography::get_perspective_transform;
///
/// let src = Quad::axis_aligned(1.0, 1.0);
/// let dst = Quad::axis_aligned(10.0, 20.0);
///
/// let m = get_perspective_transform(&src, &dst).unwrap();
/// let (x, y) = m.transform_point(1.0, 1.0);
///
/// assert!((x - 10.0).abs() < 1e-9);
/// assert!((y - 20.0).abs() < 1e-9);
/// ```
pub fn get_perspective_transform(
    src: &Quad,
    dst: &Quad,
) -> Result<HomographyMatrix, ImgprocError> {
    // augmented 8x9 system, two rows per correspondence
    let mut system = [[0.0f64; 9]; 8];
    for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
        let (x, y) = (s.x, s.y);
        let (u, v) = (d.x, d.y);
        system[2 * i] = [x, y, 1.0, 0.0, 0.0, 0.0, -u * x, -u * y, u];
        system[2 * i + 1] = [0.0, 0.0, 0.0, x, y, 1.0, -v * x, -v * y, v];
    }

    let h = solve_system(&mut system).ok_or(ImgprocError::DegenerateQuad)?;

    let mut m = [0.0f64; 9];
    m[..8].copy_from_slice(&h);
    m[8] = 1.0;

    // A valid map keeps the denominator away from zero at every source
    // corner. A vanishing denominator sends a corner to infinity, which only
    // a degenerate correspondence produces; the linear system stays solvable
    // in that case (both equation sides scale by w), so the pivot check
    // alone cannot see it.
    for s in src.iter() {
        let w = m[6] * s.x + m[7] * s.y + m[8];
        if w.abs() < PIVOT_EPSILON {
            return Err(ImgprocError::DegenerateQuad);
        }
    }

    Ok(HomographyMatrix(m))
}

/// Gaussian elimination with partial pivoting over an augmented 8x9 system.
///
/// Returns `None` when the best available pivot is ~0, i.e. the
/// correspondences do not determine a projective map.
fn solve_system(system: &mut [[f64; 9]; 8]) -> Option<[f64; 8]> {
    const N: usize = 8;

    for col in 0..N {
        // pivot on the row with the largest magnitude in this column
        let mut pivot_row = col;
        let mut pivot_val = system[col][col].abs();
        for row in col + 1..N {
            let val = system[row][col].abs();
            if val > pivot_val {
                pivot_val = val;
                pivot_row = row;
            }
        }
        if pivot_val < PIVOT_EPSILON {
            return None;
        }
        system.swap(col, pivot_row);

        for row in col + 1..N {
            let factor = system[row][col] / system[col][col];
            for k in col..=N {
                system[row][k] -= factor * system[col][k];
            }
        }
    }

    // back substitution
    let mut x = [0.0f64; N];
    for row in (0..N).rev() {
        let mut sum = 0.0;
        for col in row + 1..N {
            sum += system[row][col] * x[col];
        }
        x[row] = (system[row][N] - sum) / system[row][row];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::{get_perspective_transform, HomographyMatrix};
    use crate::error::ImgprocError;
    use approx::assert_relative_eq;
    use texrip_geometry::{Point2D, Quad};

    #[test]
    fn test_identity_correspondence() -> Result<(), ImgprocError> {
        let quad = Quad::new([
            Point2D::new(1.0, 2.0),
            Point2D::new(9.0, 1.0),
            Point2D::new(10.0, 8.0),
            Point2D::new(2.0, 9.0),
        ]);
        let m = get_perspective_transform(&quad, &quad)?;
        for (got, expected) in m.0.iter().zip(HomographyMatrix::IDENTITY.0.iter()) {
            assert_relative_eq!(*got, *expected, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_maps_corners_exactly() -> Result<(), ImgprocError> {
        let src = Quad::new([
            Point2D::new(20.0, 20.0),
            Point2D::new(80.0, 25.0),
            Point2D::new(75.0, 80.0),
            Point2D::new(15.0, 70.0),
        ]);
        let dst = Quad::axis_aligned(60.0, 55.0);

        let m = get_perspective_transform(&src, &dst)?;
        for (s, d) in src.iter().zip(dst.iter()) {
            let (x, y) = m.transform_point(s.x, s.y);
            assert_relative_eq!(x, d.x, epsilon = 1e-8);
            assert_relative_eq!(y, d.y, epsilon = 1e-8);
        }
        Ok(())
    }

    #[test]
    fn test_scale_transform() -> Result<(), ImgprocError> {
        let src = Quad::axis_aligned(1.0, 1.0);
        let dst = Quad::axis_aligned(3.0, 5.0);
        let m = get_perspective_transform(&src, &dst)?;

        let (x, y) = m.transform_point(0.5, 0.5);
        assert_relative_eq!(x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(y, 2.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_round_trip_directions() -> Result<(), ImgprocError> {
        let quad = Quad::new([
            Point2D::new(12.0, 7.0),
            Point2D::new(90.0, 15.0),
            Point2D::new(85.0, 95.0),
            Point2D::new(5.0, 88.0),
        ]);
        let rect = Quad::axis_aligned(80.0, 85.0);

        // solved one way then the other, the two matrices must invert each
        // other on every corner
        let forward = get_perspective_transform(&quad, &rect)?;
        let backward = get_perspective_transform(&rect, &quad)?;
        for corner in quad.iter() {
            let (u, v) = forward.transform_point(corner.x, corner.y);
            let (x, y) = backward.transform_point(u, v);
            assert_relative_eq!(x, corner.x, epsilon = 1e-6);
            assert_relative_eq!(y, corner.y, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_collinear_corners_rejected() {
        let src = Quad::new([
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(20.0, 0.0),
            Point2D::new(10.0, 10.0),
        ]);
        let dst = Quad::axis_aligned(10.0, 10.0);
        let result = get_perspective_transform(&src, &dst);
        assert_eq!(result, Err(ImgprocError::DegenerateQuad));
    }

    #[test]
    fn test_collinear_destination_rejected() {
        // collinear on the destination side the system stays solvable, but
        // one source corner lands at infinity; the denominator check trips
        let src = Quad::axis_aligned(14.0, 14.0);
        let dst = Quad::new([
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(20.0, 0.0),
            Point2D::new(10.0, 10.0),
        ]);
        let result = get_perspective_transform(&src, &dst);
        assert_eq!(result, Err(ImgprocError::DegenerateQuad));
    }

    #[test]
    fn test_coincident_corners_rejected() {
        let p = Point2D::new(5.0, 5.0);
        let src = Quad::new([p, p, p, p]);
        let dst = Quad::axis_aligned(10.0, 10.0);
        let result = get_perspective_transform(&src, &dst);
        assert_eq!(result, Err(ImgprocError::DegenerateQuad));
    }
}
