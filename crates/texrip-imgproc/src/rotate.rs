use texrip_image::{Image, ImageSize};

use crate::error::ImgprocError;
use crate::parallel;

/// Rotate the raster by 90 degrees, swapping width and height.
///
/// Source pixel `(x, y)` lands at `(y, w - 1 - x)` for clockwise rotation
/// and `(h - 1 - y, x)` for counter-clockwise, where `w`/`h` are the source
/// dimensions. The two directions are mutual inverses and four applications
/// in the same direction reproduce the input.
///
/// Returns a new buffer; the input is not mutated.
///
/// # Example
///
/// ```
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::rotate::rotate90;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![1u8, 2, 3],
/// )
/// .unwrap();
///
/// let rotated = rotate90(&image, true).unwrap();
///
/// assert_eq!(rotated.size().width, 1);
/// assert_eq!(rotated.size().height, 3);
/// assert_eq!(rotated.as_slice(), &[3u8, 2, 1]);
/// ```
pub fn rotate90<T, const C: usize>(
    src: &Image<T, C>,
    clockwise: bool,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let (w, h) = (src.cols(), src.rows());
    let mut dst = Image::from_size_val(
        ImageSize {
            width: h,
            height: w,
        },
        T::default(),
    )?;

    let src_slice = src.as_slice();
    parallel::par_iter_rows_mut(&mut dst, |dy, row| {
        for (dx, pixel) in row.chunks_exact_mut(C).enumerate() {
            // gather: invert the forward corner mapping for this destination
            let (sx, sy) = if clockwise {
                (w - 1 - dy, dx)
            } else {
                (dy, h - 1 - dx)
            };
            let base = (sy * w + sx) * C;
            pixel.copy_from_slice(&src_slice[base..base + C]);
        }
    });

    Ok(dst)
}
