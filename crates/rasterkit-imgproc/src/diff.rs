//! Per-pixel absolute difference maps between two images.
//!
//! The two images may disagree in size and channel count. Differences are
//! computed over the top-left aligned overlap, `min(width) x min(height)`
//! pixels and `min(channels)` channels; everything outside the overlap is
//! left unchanged in the destination.

use rayon::prelude::*;

use rasterkit_image::Image;

/// Overwrite `a` with the per-sample absolute difference `|a - b|`.
///
/// Only the top-left aligned overlap of the two images is written; samples of
/// `a` outside the overlap keep their value. Two identical images produce an
/// all-zero overlap.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::diff::diffmap;
///
/// let size = ImageSize {
///     width: 2,
///     height: 1,
/// };
/// let mut a = Image::<u8, 1>::new(size, vec![10u8, 200]).unwrap();
/// let b = Image::<u8, 1>::new(size, vec![30u8, 150]).unwrap();
///
/// diffmap(&mut a, &b);
/// assert_eq!(a.as_slice(), &[20, 50]);
/// ```
pub fn diffmap<const CA: usize, const CB: usize>(a: &mut Image<u8, CA>, b: &Image<u8, CB>) {
    if a.cols() == 0 {
        return;
    }

    let min_cols = a.cols().min(b.cols());
    let min_rows = a.rows().min(b.rows());
    let min_channels = CA.min(CB);

    let a_row_len = a.cols() * CA;
    let b_data = b.as_slice();

    a.as_slice_mut()
        .par_chunks_exact_mut(a_row_len)
        .take(min_rows)
        .enumerate()
        .for_each(|(r, a_row)| {
            let b_row = &b_data[r * b.cols() * CB..];
            for c in 0..min_cols {
                for ch in 0..min_channels {
                    let a_px = &mut a_row[c * CA + ch];
                    *a_px = a_px.abs_diff(b_row[c * CB + ch]);
                }
            }
        });
}

/// Overwrite `a` with the absolute difference `|a - b|`, stretched to use the
/// full byte range.
///
/// Computes the same overlap difference as [`diffmap`], then multiplies every
/// byte of the buffer, overlap or not, by `255 / max(scale_hint, largest)`
/// where `largest` is the largest difference found in the overlap. The
/// division is integer, so the brightest sample lands near but not always
/// exactly at 255. A `scale_hint` above the real maximum dampens the stretch;
/// products saturate at 255.
pub fn diffmap_scale<const CA: usize, const CB: usize>(
    a: &mut Image<u8, CA>,
    b: &Image<u8, CB>,
    scale_hint: u8,
) {
    if a.cols() == 0 {
        return;
    }

    let min_cols = a.cols().min(b.cols());
    let min_rows = a.rows().min(b.rows());
    let min_channels = CA.min(CB);

    let a_row_len = a.cols() * CA;
    let b_data = b.as_slice();

    let largest = a
        .as_slice_mut()
        .par_chunks_exact_mut(a_row_len)
        .take(min_rows)
        .enumerate()
        .map(|(r, a_row)| {
            let b_row = &b_data[r * b.cols() * CB..];
            let mut row_largest = 0u8;
            for c in 0..min_cols {
                for ch in 0..min_channels {
                    let a_px = &mut a_row[c * CA + ch];
                    *a_px = a_px.abs_diff(b_row[c * CB + ch]);
                    row_largest = row_largest.max(*a_px);
                }
            }
            row_largest
        })
        .max()
        .unwrap_or(0);

    let factor = 255 / scale_hint.max(largest).max(1) as u16;

    a.as_slice_mut()
        .par_iter_mut()
        .for_each(|px| *px = (*px as u16 * factor).min(255) as u8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::{ImageError, ImageSize};

    #[test]
    fn diffmap_identical_is_zero() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let data: Vec<u8> = (0..18).map(|v| v * 7).collect();
        let mut a = Image::<u8, 3>::new(size, data.clone())?;
        let b = Image::<u8, 3>::new(size, data)?;

        diffmap(&mut a, &b);
        assert_eq!(a.as_slice(), &[0u8; 18]);
        Ok(())
    }

    #[test]
    fn diffmap_is_symmetric_in_magnitude() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let a_data = vec![10u8, 250];
        let b_data = vec![40u8, 100];

        let mut ab = Image::<u8, 1>::new(size, a_data.clone())?;
        diffmap(&mut ab, &Image::<u8, 1>::new(size, b_data.clone())?);

        let mut ba = Image::<u8, 1>::new(size, b_data)?;
        diffmap(&mut ba, &Image::<u8, 1>::new(size, a_data)?);

        assert_eq!(ab.as_slice(), ba.as_slice());
        assert_eq!(ab.as_slice(), &[30, 150]);
        Ok(())
    }

    #[test]
    fn diffmap_mismatched_shapes() -> Result<(), ImageError> {
        // 3x2 rgb against 2x3 grayscale: overlap is 2x2, channel 0 only
        let mut a = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![100u8; 18],
        )?;
        let b = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![40u8; 6],
        )?;

        diffmap(&mut a, &b);

        for r in 0..2 {
            for c in 0..3 {
                let px = a.get_pixel(c, r)?;
                if c < 2 {
                    assert_eq!(px, [60, 100, 100]);
                } else {
                    assert_eq!(px, [100, 100, 100]);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn diffmap_scale_stretches_to_full_range() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let mut a = Image::<u8, 1>::new(size, vec![60u8, 10])?;
        let b = Image::<u8, 1>::new(size, vec![10u8, 35])?;

        // diffs are 50 and 25, factor = 255 / 50 = 5
        diffmap_scale(&mut a, &b, 0);
        assert_eq!(a.as_slice(), &[250, 125]);
        Ok(())
    }

    #[test]
    fn diffmap_scale_covers_whole_buffer() -> Result<(), ImageError> {
        // the overlap is 2x1; the trailing byte is outside it but the
        // stretch pass still multiplies it
        let mut a = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![50u8, 10, 7],
        )?;
        let b = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0u8, 0],
        )?;

        // overlap diffs are 50 and 10, factor = 255 / 50 = 5
        diffmap_scale(&mut a, &b, 0);
        assert_eq!(a.as_slice(), &[250, 50, 35]);
        Ok(())
    }

    #[test]
    fn diffmap_scale_identical_is_zero() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 4,
        };
        let data: Vec<u8> = (0..16).collect();
        for hint in [0u8, 1, 128, 255] {
            let mut a = Image::<u8, 1>::new(size, data.clone())?;
            let b = Image::<u8, 1>::new(size, data.clone())?;
            diffmap_scale(&mut a, &b, hint);
            assert_eq!(a.as_slice(), &[0u8; 16]);
        }
        Ok(())
    }

    #[test]
    fn diffmap_scale_hint_dampens() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 1,
            height: 1,
        };
        let mut a = Image::<u8, 1>::new(size, vec![50u8])?;
        let b = Image::<u8, 1>::new(size, vec![0u8])?;

        // hint 100 beats the real maximum of 50: factor = 255 / 100 = 2
        diffmap_scale(&mut a, &b, 100);
        assert_eq!(a.as_slice(), &[100]);
        Ok(())
    }
}
