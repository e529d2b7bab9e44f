//! In-place image mirroring.

use rayon::prelude::*;

use rasterkit_image::Image;

/// Mirror an image around its vertical axis, in place.
///
/// Whole pixels swap positions within each row; the channel order inside a
/// pixel is preserved. Applying the flip twice restores the original image.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::flip::horizontal_flip;
///
/// let size = ImageSize {
///     width: 3,
///     height: 1,
/// };
/// let mut image = Image::<u8, 1>::new(size, vec![1u8, 2, 3]).unwrap();
///
/// horizontal_flip(&mut image);
/// assert_eq!(image.as_slice(), &[3, 2, 1]);
/// ```
pub fn horizontal_flip<T, const C: usize>(image: &mut Image<T, C>)
where
    T: Send + Sync,
{
    let cols = image.cols();
    if cols < 2 {
        return;
    }
    let row_len = cols * C;

    image
        .as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .for_each(|row| {
            let mut left = 0;
            let mut right = cols - 1;
            while left < right {
                let (head, tail) = row.split_at_mut(right * C);
                head[left * C..left * C + C].swap_with_slice(&mut tail[..C]);
                left += 1;
                right -= 1;
            }
        });
}

/// Mirror an image around its horizontal axis, in place.
///
/// Whole rows swap positions; the pixel order inside a row is preserved.
/// Applying the flip twice restores the original image.
pub fn vertical_flip<T, const C: usize>(image: &mut Image<T, C>) {
    let rows = image.rows();
    let row_len = image.cols() * C;

    let data = image.as_slice_mut();
    for r in 0..rows / 2 {
        let mirror = rows - 1 - r;
        let (head, tail) = data.split_at_mut(mirror * row_len);
        head[r * row_len..(r + 1) * row_len].swap_with_slice(&mut tail[..row_len]);
    }
}
