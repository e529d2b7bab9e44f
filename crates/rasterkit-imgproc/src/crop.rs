use num_traits::Zero;
use rayon::prelude::*;

use rasterkit_image::{Image, ImageError};

/// Copy a rectangular window of `src` into `dst`.
///
/// The window starts at `(x, y)` in the source and has the destination's
/// size. Destination pixels that fall outside the source, because the window
/// extends past the right or bottom edge or starts beyond it entirely, are
/// filled with zeros.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::crop::crop_image;
///
/// let src = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 3,
///     },
///     vec![0u8, 1, 2, 3, 4, 5, 6, 7, 8],
/// )
/// .unwrap();
/// let mut dst = Image::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     0u8,
/// )
/// .unwrap();
///
/// crop_image(&src, &mut dst, 1, 1).unwrap();
/// assert_eq!(dst.as_slice(), &[4, 5, 7, 8]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Zero + Send + Sync,
{
    if dst.cols() == 0 || dst.rows() == 0 {
        return Ok(());
    }

    let copy_cols = dst.cols().min(src.cols().saturating_sub(x));
    let copy_rows = dst.rows().min(src.rows().saturating_sub(y));

    let src_row_len = src.cols() * C;
    let dst_row_len = dst.cols() * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_row_len)
        .enumerate()
        .for_each(|(r, dst_row)| {
            if r < copy_rows && copy_cols > 0 {
                let src_off = (y + r) * src_row_len + x * C;
                dst_row[..copy_cols * C]
                    .copy_from_slice(&src_data[src_off..src_off + copy_cols * C]);
                dst_row[copy_cols * C..].fill(T::zero());
            } else {
                dst_row.fill(T::zero());
            }
        });

    Ok(())
}
