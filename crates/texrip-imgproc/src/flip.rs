use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

use texrip_image::Image;

use crate::error::ImgprocError;

/// Flip the input raster horizontally (mirror columns).
///
/// Returns a new buffer; the input is not mutated.
///
/// # Example
///
/// ```
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[1u8, 0, 3, 2, 5, 4]);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImgprocError>
where
    T: Clone + Send + Sync,
{
    let mut dst = src.clone();
    let cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .for_each(|row| {
            let mut i = 0;
            let mut j = cols - 1;
            while i < j {
                for c in 0..C {
                    row.swap(i * C + c, j * C + c);
                }
                i += 1;
                j -= 1;
            }
        });

    Ok(dst)
}

/// Flip the input raster vertically (mirror rows).
///
/// Returns a new buffer; the input is not mutated.
///
/// # Example
///
/// ```
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::flip::vertical_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[4u8, 5, 2, 3, 0, 1]);
/// ```
pub fn vertical_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImgprocError>
where
    T: Clone + Send + Sync,
{
    let mut dst = src.clone();
    let rows = src.rows();
    let row_len = src.cols() * C;

    let slice = dst.as_slice_mut();
    for r in 0..rows / 2 {
        let top = r * row_len;
        let bottom = (rows - 1 - r) * row_len;
        for k in 0..row_len {
            slice.swap(top + k, bottom + k);
        }
    }

    Ok(dst)
}

/// Mirror the raster about either or both of its axes.
///
/// `flip_x` mirrors columns, `flip_y` mirrors rows; the two commute, and
/// flipping neither returns a plain copy.
pub fn flip<T, const C: usize>(
    src: &Image<T, C>,
    flip_x: bool,
    flip_y: bool,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Clone + Send + Sync,
{
    match (flip_x, flip_y) {
        (false, false) => Ok(src.clone()),
        (true, false) => horizontal_flip(src),
        (false, true) => vertical_flip(src),
        (true, true) => vertical_flip(&horizontal_flip(src)?),
    }
}
