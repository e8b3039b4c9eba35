use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use texrip_image::Image;

/// Apply a function to each destination row in parallel.
///
/// Rows are handed to `f` as disjoint `width * CHANNELS` slices together
/// with their row index, so per-pixel work with no data dependencies runs
/// across the rayon pool.
pub fn par_iter_rows_mut<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(row, chunk)| f(row, chunk));
}
