use rayon::prelude::*;

use rasterkit_image::{Image, ImageError, ImageSize};

use crate::interpolation::{bicubic_sample, bilinear_sample, nearest_sample, InterpolationMode};

/// Resize an image to the destination's size.
///
/// Every destination pixel is mapped back to a fractional source coordinate
/// and sampled with the requested kernel. Nearest neighbor maps through the
/// size ratio, so upscaling repeats pixels evenly; the blending kernels map
/// corner to corner, so the first and last samples of each axis are
/// preserved exactly.
///
/// # Errors
///
/// Fails if the source has a zero dimension or the destination is smaller
/// than 2x2.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::interpolation::InterpolationMode;
/// use rasterkit_imgproc::resize::resize_native;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut resized = Image::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     0u8,
/// )
/// .unwrap();
///
/// resize_native(&image, &mut resized, InterpolationMode::Bilinear).unwrap();
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    let ImageSize {
        width: src_w,
        height: src_h,
    } = src.size();
    let ImageSize {
        width: dst_w,
        height: dst_h,
    } = dst.size();

    if src_w == 0 || src_h == 0 {
        return Err(ImageError::InvalidImageSize(src_w, src_h, dst_w, dst_h));
    }
    if dst_w < 2 || dst_h < 2 {
        return Err(ImageError::InvalidTargetSize(dst_w, dst_h));
    }

    // map a destination index to a fractional source coordinate
    let map = |i: usize, dst_len: usize, src_len: usize| -> f32 {
        match interpolation {
            InterpolationMode::Nearest => {
                let scale = dst_len as f32 / src_len as f32;
                (i as f32 / scale).trunc()
            }
            InterpolationMode::Bilinear | InterpolationMode::Bicubic => {
                let scale = (src_len - 1) as f32 / (dst_len - 1) as f32;
                i as f32 * scale
            }
        }
    };

    let sample = |u: f32, v: f32| -> [u8; C] {
        match interpolation {
            InterpolationMode::Nearest => nearest_sample(src, u, v),
            InterpolationMode::Bilinear => bilinear_sample(src, u, v),
            InterpolationMode::Bicubic => bicubic_sample(src, u, v),
        }
    };

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_w * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let v = map(y, dst_h, src_h);
            for (x, px) in dst_row.chunks_exact_mut(C).enumerate() {
                let u = map(x, dst_w, src_w);
                px.copy_from_slice(&sample(u, v));
            }
        });

    Ok(())
}
