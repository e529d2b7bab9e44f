use rasterkit_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::filter::mask::Mask;
use crate::parallel::ExecutionStrategy;

/// Policy resolving kernel taps that reference coordinates outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Out-of-range taps contribute nothing.
    Zero,
    /// Out-of-range coordinates are clamped to the nearest edge pixel.
    Clamp,
    /// Out-of-range coordinates wrap around the image (toroidal boundary).
    Wrap,
}

impl Border {
    /// Resolve a possibly out-of-range coordinate, or `None` when the tap is
    /// to be skipped.
    pub fn resolve(
        &self,
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let in_bounds = row >= 0 && row < rows as isize && col >= 0 && col < cols as isize;
        match self {
            Border::Zero => in_bounds.then_some((row as usize, col as usize)),
            Border::Clamp => Some((
                row.clamp(0, rows as isize - 1) as usize,
                col.clamp(0, cols as isize - 1) as usize,
            )),
            Border::Wrap => Some((
                row.rem_euclid(rows as isize) as usize,
                col.rem_euclid(cols as isize) as usize,
            )),
        }
    }
}

/// Convolve one channel of an image with a mask.
///
/// Uses [`ExecutionStrategy::Auto`]; see [`convolve_channel_with_strategy`]
/// for explicit control.
pub fn convolve_channel<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    channel: usize,
    mask: &Mask,
    border: Border,
) -> Result<(), ImageError> {
    convolve_channel_with_strategy(src, dst, channel, mask, border, ExecutionStrategy::Auto)
}

/// Convolve one channel of an image with a mask, with execution strategy
/// control.
///
/// For every output coordinate the selected channel holds the mask-weighted
/// sum of the source samples around it, rounded and saturated into
/// `[0, 255]`; the other channels are copied through unchanged. The engine
/// reads only from `src` and writes only to `dst`, so the result is
/// independent of how the output rows are scheduled.
///
/// # Errors
///
/// Fails before touching `dst` when the channel index is out of bounds, the
/// image shapes differ, or [`Border::Wrap`] is requested for an image with
/// fewer than 3 channels.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::filter::{convolve_channel, Border, Mask};
///
/// let src = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 3,
///     },
///     vec![9u8; 9],
/// )
/// .unwrap();
/// let mut dst = Image::from_size_val(src.size(), 0u8).unwrap();
///
/// convolve_channel(&src, &mut dst, 0, &Mask::box_blur3(), Border::Clamp).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn convolve_channel_with_strategy<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    channel: usize,
    mask: &Mask,
    border: Border,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    validate::<C>(src, dst, border)?;

    if channel >= C {
        return Err(ImageError::ChannelIndexOutOfBounds(channel, C));
    }

    dst.as_slice_mut().copy_from_slice(src.as_slice());
    channel_pass(src, dst, channel, mask, border, strategy);

    Ok(())
}

/// Convolve every channel of an image with a mask.
///
/// Uses [`ExecutionStrategy::Auto`]; see [`convolve_with_strategy`].
pub fn convolve<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    mask: &Mask,
    border: Border,
) -> Result<(), ImageError> {
    convolve_with_strategy(src, dst, mask, border, ExecutionStrategy::Auto)
}

/// Convolve every channel of an image with a mask, with execution strategy
/// control.
///
/// Each channel is filtered independently from the unmodified source.
pub fn convolve_with_strategy<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    mask: &Mask,
    border: Border,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    validate::<C>(src, dst, border)?;

    dst.as_slice_mut().copy_from_slice(src.as_slice());
    for channel in 0..C {
        channel_pass(src, dst, channel, mask, border, strategy);
    }

    Ok(())
}

pub(crate) fn validate<const C: usize>(
    src: &Image<u8, C>,
    dst: &Image<u8, C>,
    border: Border,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // parity with the reference system: the cyclic boundary is only defined
    // for color images
    if border == Border::Wrap && C < 3 {
        return Err(ImageError::UnsupportedChannelCount(C));
    }

    Ok(())
}

/// Overwrite one channel of `dst` with the filtered channel of `src`.
fn channel_pass<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    channel: usize,
    mask: &Mask,
    border: Border,
    strategy: ExecutionStrategy,
) {
    let rows = src.rows();
    let cols = src.cols();
    if rows == 0 || cols == 0 {
        return;
    }
    let src_data = src.as_slice();

    if strategy.is_parallel(rows * cols) {
        dst.as_slice_mut()
            .par_chunks_exact_mut(cols * C)
            .enumerate()
            .for_each(|(r, dst_row)| {
                convolve_row::<C>(src_data, rows, cols, channel, mask, border, r, dst_row);
            });
    } else {
        dst.as_slice_mut()
            .chunks_exact_mut(cols * C)
            .enumerate()
            .for_each(|(r, dst_row)| {
                convolve_row::<C>(src_data, rows, cols, channel, mask, border, r, dst_row);
            });
    }
}

#[allow(clippy::too_many_arguments)]
fn convolve_row<const C: usize>(
    src_data: &[u8],
    rows: usize,
    cols: usize,
    channel: usize,
    mask: &Mask,
    border: Border,
    r: usize,
    dst_row: &mut [u8],
) {
    let kh = mask.height();
    let kw = mask.width();
    let cr = mask.center_row() as isize;
    let cc = mask.center_col() as isize;

    for c in 0..cols {
        let mut acc = 0.0f32;
        for ki in 0..kh {
            // the tap at kernel row ki samples the image at r - (ki - cr)
            let tap_row = r as isize - (ki as isize - cr);
            for kj in 0..kw {
                let tap_col = c as isize - (kj as isize - cc);
                if let Some((row, col)) = border.resolve(tap_row, tap_col, rows, cols) {
                    let sample = src_data[(row * cols + col) * C + channel];
                    acc += mask.weight(ki, kj) * sample as f32;
                }
            }
        }
        dst_row[c * C + channel] = (acc.round()).clamp(0.0, 255.0) as u8;
    }
}

/// Accumulate the raw (unsaturated) convolution of one channel.
///
/// Used by operators that combine several kernel responses before
/// saturating, like the Sobel gradient magnitude.
pub(crate) fn convolve_channel_raw<const C: usize>(
    src: &Image<u8, C>,
    channel: usize,
    mask: &Mask,
    border: Border,
) -> Vec<f32> {
    let rows = src.rows();
    let cols = src.cols();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let src_data = src.as_slice();

    let kh = mask.height();
    let kw = mask.width();
    let cr = mask.center_row() as isize;
    let cc = mask.center_col() as isize;

    let mut out = vec![0.0f32; rows * cols];
    out.par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            for (c, out_val) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for ki in 0..kh {
                    let tap_row = r as isize - (ki as isize - cr);
                    for kj in 0..kw {
                        let tap_col = c as isize - (kj as isize - cc);
                        if let Some((row, col)) = border.resolve(tap_row, tap_col, rows, cols) {
                            let sample = src_data[(row * cols + col) * C + channel];
                            acc += mask.weight(ki, kj) * sample as f32;
                        }
                    }
                }
                *out_val = acc;
            }
        });

    out
}
