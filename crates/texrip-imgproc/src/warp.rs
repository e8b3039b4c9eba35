use texrip_geometry::Quad;
use texrip_image::{Image, ImageSize};

use crate::error::ImgprocError;
use crate::homography::{get_perspective_transform, HomographyMatrix};
use crate::parallel;

/// Resample `src` into `dst` through a perspective transform.
///
/// `m` maps destination pixel coordinates into source space (dest -> source).
/// Every destination pixel is inverse-mapped and rounded to the nearest
/// source pixel, whose channels are copied verbatim. Destination pixels
/// whose source coordinate falls outside the source raster are left
/// untouched, so a zero-initialized destination keeps transparent black
/// there.
///
/// Nearest-neighbor only; rows of the destination are processed in parallel.
///
/// # Example
///
/// ```
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::homography::HomographyMatrix;
/// use texrip_imgproc::warp::warp_perspective;
///
/// let src = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![10u8, 20, 30, 40],
/// )
/// .unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0u8).unwrap();
///
/// warp_perspective(&src, &mut dst, &HomographyMatrix::IDENTITY).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_perspective<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &HomographyMatrix,
) -> Result<(), ImgprocError>
where
    T: Copy + Send + Sync,
{
    let (src_cols, src_rows) = (src.cols() as f64, src.rows() as f64);
    let src_width = src.cols();
    let src_slice = src.as_slice();

    parallel::par_iter_rows_mut(dst, |row, row_slice| {
        for (col, pixel) in row_slice.chunks_exact_mut(C).enumerate() {
            let (sx, sy) = m.transform_point(col as f64, row as f64);
            let (sx, sy) = (sx.round(), sy.round());
            if sx >= 0.0 && sx < src_cols && sy >= 0.0 && sy < src_rows {
                let base = (sy as usize * src_width + sx as usize) * C;
                pixel.copy_from_slice(&src_slice[base..base + C]);
            }
        }
    });

    Ok(())
}

/// Extract the perspective-corrected texture under `quad` from `src`.
///
/// The output size comes from [`Quad::extent`] rounded to the nearest pixel;
/// the homography is solved with the target rectangle as the source side, so
/// the matrix maps destination pixels straight into `src` space for
/// [`warp_perspective`]. A fresh buffer is allocated; `src` is never
/// mutated.
///
/// # Errors
///
/// * [`ImgprocError::EmptyExtent`] when either target axis rounds to zero
///   pixels, before any allocation.
/// * [`ImgprocError::DegenerateQuad`] when the corners admit no perspective
///   mapping.
///
/// # Example
///
/// ```
/// use texrip_geometry::Quad;
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::warp::extract_quad;
///
/// let src = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     255u8,
/// )
/// .unwrap();
///
/// let texture = extract_quad(&src, &Quad::axis_aligned(4.0, 2.0)).unwrap();
///
/// assert_eq!(texture.size().width, 4);
/// assert_eq!(texture.size().height, 2);
/// ```
pub fn extract_quad<T, const C: usize>(
    src: &Image<T, C>,
    quad: &Quad,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let extent = quad.extent();
    let width = extent.width.round() as usize;
    let height = extent.height.round() as usize;
    if width == 0 || height == 0 {
        return Err(ImgprocError::EmptyExtent(width, height));
    }

    let target = Quad::axis_aligned(width as f64, height as f64);
    let m = get_perspective_transform(&target, quad)?;

    let mut dst = Image::from_size_val(ImageSize { width, height }, T::default())?;
    warp_perspective(src, &mut dst, &m)?;

    Ok(dst)
}
